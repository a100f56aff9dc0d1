use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use campdeck::app::App;
use campdeck::config::Config;
use campdeck::logging::init_logging;
use campdeck::rest::{self, ApiState};
use campdeck::seed::seed_campaigns;
use campdeck::store::CampaignStore;
use campdeck::types::CampaignStatus;
use campdeck::workflow;

#[derive(Parser)]
#[command(name = "campdeck")]
#[command(about = "Campaign lifecycle dashboard for cross-border influencer marketing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List campaigns with their workflow stage
    List {
        /// Include completed and cancelled campaigns
        #[arg(short, long)]
        all: bool,

        /// Only campaigns updated within the configured history window
        #[arg(long, conflicts_with = "all")]
        recent: bool,
    },

    /// Show one campaign's derived workflow
    Show {
        /// Campaign id
        id: Uuid,
    },

    /// Create a campaign
    Create {
        /// Campaign title
        title: String,

        /// Brand name
        #[arg(short, long)]
        brand: String,

        /// Budget in KRW
        #[arg(long)]
        budget: Option<u64>,

        /// Number of influencers
        #[arg(long)]
        influencers: Option<u32>,
    },

    /// Set a campaign's lifecycle status
    SetStatus {
        /// Campaign id
        id: Uuid,

        /// Kebab-case status (e.g. plan-review, producing, live)
        status: String,
    },

    /// Fill an empty store with sample campaigns
    Seed {
        /// Replace existing campaigns
        #[arg(long)]
        force: bool,
    },

    /// Run the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration
    Config {
        /// Write it to .campdeck/config.toml as a starting point
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();
    let logging = init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        None => {
            let mut app = App::new(config)?;
            let result = app.run();
            if let Some(path) = &logging.log_file_path {
                println!("Session log: {}", path.display());
            }
            result
        }
        Some(Commands::List { all, recent }) => cmd_list(&config, all, recent),
        Some(Commands::Show { id }) => cmd_show(&config, id),
        Some(Commands::Create {
            title,
            brand,
            budget,
            influencers,
        }) => cmd_create(&config, title, brand, budget, influencers),
        Some(Commands::SetStatus { id, status }) => cmd_set_status(&config, id, &status),
        Some(Commands::Seed { force }) => cmd_seed(&config, force),
        Some(Commands::Serve { port }) => {
            let port = port.unwrap_or(config.rest_api.port);
            let state = ApiState::new(config);
            rest::serve(state, port).await
        }
        Some(Commands::Config { init }) => cmd_config(&config, init),
    }
}

fn cmd_list(config: &Config, all: bool, recent: bool) -> Result<()> {
    let store = CampaignStore::load(config)?;

    let campaigns: Vec<_> = if recent {
        store.recently_updated(config.ui.history_hours)
    } else if all {
        store.campaigns.iter().collect()
    } else {
        store.active_campaigns()
    };

    if campaigns.is_empty() {
        println!("No campaigns. Run 'campdeck seed' for sample data.");
        return Ok(());
    }

    for campaign in campaigns {
        let stage = workflow::stage_for(Some(campaign));
        println!(
            "{}  [{}/5 {:>3}%]  {:<18}  {}  ({})",
            campaign.id,
            stage.stage,
            stage.progress,
            campaign.status.as_str(),
            campaign.title,
            campaign.brand,
        );
    }
    Ok(())
}

fn cmd_show(config: &Config, id: Uuid) -> Result<()> {
    let store = CampaignStore::load(config)?;
    let campaign = store
        .get(id)
        .with_context(|| format!("campaign {id} not found"))?;

    let stage = workflow::stage_for(Some(campaign));
    println!("{} — {}", campaign.title, campaign.brand);
    println!("status: {}", campaign.status);
    println!("stage:  {}/5  {} ({}%)", stage.stage, stage.title, stage.progress);
    println!("        {}", stage.description);
    println!();

    for step in workflow::workflow_steps(stage.stage) {
        let glyph = if step.completed {
            "✓"
        } else if step.current {
            "●"
        } else {
            "○"
        };
        println!("  {glyph} {} {}", step.id, step.title);
    }

    println!();
    for tab in workflow::ALL_TABS {
        let mark = if workflow::tab_enabled(tab, stage.stage) {
            "enabled"
        } else {
            "disabled"
        };
        println!("  tab {tab:<20} {mark}");
    }
    println!("  default tab: {}", workflow::default_tab(stage.stage));

    Ok(())
}

fn cmd_create(
    config: &Config,
    title: String,
    brand: String,
    budget: Option<u64>,
    influencers: Option<u32>,
) -> Result<()> {
    let mut store = CampaignStore::load(config)?;
    let id = store.create(title, brand, budget, influencers)?;
    println!("Created campaign {id}");
    Ok(())
}

fn cmd_set_status(config: &Config, id: Uuid, status: &str) -> Result<()> {
    let status: CampaignStatus = status
        .parse()
        .with_context(|| "expected one of the kebab-case lifecycle statuses")?;

    let mut store = CampaignStore::load(config)?;
    store.set_status(id, status)?;

    let stage = workflow::stage_for(store.get(id));
    println!("{id} -> {status} (stage {}/5, {}%)", stage.stage, stage.progress);
    Ok(())
}

fn cmd_config(config: &Config, init: bool) -> Result<()> {
    if init {
        config.save()?;
        println!("Wrote {}", Config::project_config_path().display());
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}

fn cmd_seed(config: &Config, force: bool) -> Result<()> {
    let mut store = CampaignStore::load(config)?;
    let count = seed_campaigns(&mut store, force)?;
    if count == 0 {
        println!("Store not empty; use --force to replace.");
    } else {
        println!("Seeded {count} campaigns.");
    }
    Ok(())
}
