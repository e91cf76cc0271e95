use std::sync::Arc;

use anyhow::{Context, Result};
use bringup_core::bringup::Orchestrator;
use bringup_tokio::{AlwaysSucceed, ChannelSink, EventBus, LoopbackNode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pe_ars408_launch::config::LaunchConfig;
use pe_ars408_launch::launch::LaunchPlan;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = LaunchConfig::from_args();
    for arg in &config.unknown {
        warn!("ignoring unknown launch argument {arg}");
    }

    let plan = LaunchPlan::compose(&config).context("compose launch plan")?;
    info!("launch plan\n{plan}");
    if config.plan_only {
        return Ok(());
    }

    let bus = EventBus::new();
    let (sink, requests) = ChannelSink::new();
    let mut orchestrator = Orchestrator::new(sink);
    plan.install(&mut orchestrator)
        .with_context(|| format!("register bring-up rules for {}", plan.handle))?;

    let orchestrator = Arc::new(orchestrator);
    let session = tokio::spawn(bringup_tokio::run_bringup(orchestrator, bus.subscribe()));

    let node = LoopbackNode::new(plan.handle.clone(), Box::new(AlwaysSucceed), bus.clone());
    node.start();
    let runtime = tokio::spawn(bringup_tokio::run_loopback(node, requests));

    info!(
        "bring-up running for {} (auto_configure={} auto_activate={})",
        plan.handle, plan.guards.auto_configure, plan.guards.auto_activate
    );

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("wait for ctrl-c")?;
            info!("shutdown");
        }
        joined = session => {
            joined
                .context("bring-up session task")?
                .context("bring-up session")?;
        }
    }

    runtime.abort();
    Ok(())
}
