use crate::event::CharmEvent;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    #[arg(short, long, default_value_t = String::from("/etc/cos-mock-charm/config.yaml"))]
    config: String,

    /// File holding the scrape jobs, dashboards and peer data of the joined relations.
    #[arg(short, long, default_value_t = String::from("relation-data.yaml"))]
    relation_data: String,

    /// Event to handle. Can be repeated, events are handled in the given order.
    #[arg(short, long = "event", value_enum)]
    events: Vec<CharmEvent>,

    #[arg(long)]
    print_debug_info: bool,
}

impl Cli {
    /// Parses command line arguments
    pub fn init_cos_mock_charm_cli() -> Self {
        Self::parse()
    }

    pub fn get_config(&self) -> PathBuf {
        PathBuf::from(&self.config)
    }

    pub fn get_relation_data(&self) -> PathBuf {
        PathBuf::from(&self.relation_data)
    }

    /// Requested events, `config-changed` when none was given.
    pub fn events(&self) -> Vec<CharmEvent> {
        if self.events.is_empty() {
            return vec![CharmEvent::ConfigChanged];
        }
        self.events.clone()
    }

    pub fn print_debug_info(&self) -> bool {
        self.print_debug_info
    }
}
