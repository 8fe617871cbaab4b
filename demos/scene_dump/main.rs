//! Scene dump: builds one backyard scene and prints it as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example scene_dump                          # lagoon 24x12x6 at sunset
//! cargo run --example scene_dump -- kidney 20 10 5 night  # shape, length, width, depth, time
//! RUST_LOG=poolscape=debug cargo run --example scene_dump # with build logs
//! ```
//!
//! Options are read from `poolscape.toml` in the working directory when present.

use poolscape::config::BuildOptions;
use poolscape::pool::{Dimensions, FinishKind, PoolSpec, ShapeKind};
use poolscape::scene::{ElementKind, TimeOfDay};
use poolscape::session::DesignSession;

fn main() -> poolscape::Result<()> {
    // Default: WARN for everything, INFO for poolscape.
    // Override with RUST_LOG env var (e.g. RUST_LOG=poolscape=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scene_dump=info".parse().unwrap_or_default())
        .add_directive("poolscape=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).map(String::as_str);
    let number = |i: usize, default: f64| arg(i).and_then(|s| s.parse().ok()).unwrap_or(default);

    let options = match std::fs::read_to_string("poolscape.toml") {
        Ok(content) => BuildOptions::from_toml_str(&content)?,
        Err(_) => BuildOptions::default(),
    };

    let spec = PoolSpec::new(
        ShapeKind::from_key(arg(0).unwrap_or("lagoon")),
        FinishKind::PebbleTec,
        Dimensions::new(number(1, 24.0), number(2, 12.0), number(3, 6.0))?,
    )
    .with_time_of_day(TimeOfDay::from_key(arg(4).unwrap_or("sunset")));

    let mut session = DesignSession::new(spec, options);
    for kind in [ElementKind::Patio, ElementKind::PalmTree, ElementKind::FirePit] {
        session.add_element(kind)?;
    }

    let estimate = session.estimate()?;
    let solid = session.solid()?;
    tracing::info!(
        shape = %spec.shape,
        gallons = solid.gallons().round(),
        total = estimate.total.round(),
        "design ready"
    );

    println!("{}", session.compose(0.0)?.to_json_pretty()?);
    Ok(())
}
