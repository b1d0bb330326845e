//! Entry point of the COS mock charm.
//!
//! Handles the requested events against the current relation data and prints the resulting
//! unit status on stdout.
use cos_mock_charm::charm::CosMockCharm;
use cos_mock_charm::cli::Cli;
use cos_mock_charm::config::store::CharmConfigStoreFile;
use cos_mock_charm::event::channel::pub_sub;
use cos_mock_charm::http::config::HttpConfig;
use cos_mock_charm::http::reqwest::ReqwestHttpClient;
use cos_mock_charm::logging::Logging;
use cos_mock_charm::relation::file::RelationDataFile;
use cos_mock_charm::relation::peer::PeerData;
use cos_mock_charm::status::Status;
use cos_mock_charm::validator::{DashboardValidator, TargetValidator};
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, info};

/// Exit code reported when the unit ends up blocked.
const BLOCKED_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::init_cos_mock_charm_cli();
    match _main(cli) {
        Ok(status) if status.is_blocked() => ExitCode::from(BLOCKED_EXIT_CODE),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// This is the actual main function.
///
/// It is separated from [main] so errors are reported in their display format only.
fn _main(cli: Cli) -> Result<Status, Box<dyn Error>> {
    let config = CharmConfigStoreFile::new(&cli.get_config()).load()?;
    Logging::try_init(&config.log)?;

    if cli.print_debug_info() {
        println!("Printing debug info");
        println!("CLI: {cli:#?}");
        println!("Config: {config:#?}");
    }

    let relation_data = RelationDataFile::new(&cli.get_relation_data());
    let peers = relation_data.peer_bucket();
    debug!(has_peer_relation = peers.is_some(), "Relation data loaded");

    let http_client = ReqwestHttpClient::try_new(HttpConfig::from(&config.http))?;
    let charm = CosMockCharm::new(
        relation_data.clone(),
        relation_data,
        TargetValidator::new(http_client).with_require_targets(config.targets.require_targets),
        DashboardValidator::new(config.dashboards.policy()),
        PeerData::new(peers),
    );

    let (event_publisher, event_consumer) = pub_sub();
    for event in cli.events() {
        event_publisher.publish(event)?;
    }
    drop(event_publisher);

    info!("Starting charm");
    charm.run(event_consumer);

    let status = charm.status();
    println!("{status}");
    Ok(status)
}
