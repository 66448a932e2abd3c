//! # Runtime Loop
//!
//! Wires a [`SkillsBoard`] to a synthetic 60 Hz clock and drives it for a
//! fixed number of frames. Everything interesting is logged through
//! `tracing`; set `RUST_LOG=debug` (or `trace` for per-step detail) to see
//! more.

use anyhow::{Context, Result};
use physics::clock::CANONICAL_FRAME_MS;
use physics::{BallSim, Container, Vec2};
use scene::{SkillSet, Technology};
use tracing_subscriber::EnvFilter;
use tumble::{BoardMode, SkillsBoard};

use crate::watcher;
use crate::Args;

const DEFAULT_TECHNOLOGIES: &[&str] = &[
    "Rust",
    "TypeScript",
    "React",
    "Node.js",
    "PostgreSQL",
    "Docker",
    "Kubernetes",
    "Go",
    "Python",
    "Redis",
];

const LOG_EVERY: usize = 50;

/// Run the headless board.
///
/// # Errors
///
/// Returns an error if the skill set cannot be loaded or the watcher cannot
/// be started. Reload failures while running are logged and skipped.
#[allow(clippy::cast_precision_loss)]
pub fn run(args: &Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let skills = match &args.scene {
        Some(path) => SkillSet::from_path(path)?,
        None => default_skill_set(),
    };
    let container = skills
        .container()
        .unwrap_or_else(|| Container::new(args.width, args.height));

    let config = skills.simulation_config();
    let sim = match args.seed {
        Some(seed) => BallSim::with_seed(config, seed),
        None => BallSim::new(config),
    }
    .with_drag_config(skills.drag_config());
    let adapter = render::select_adapter(!args.no_webgl);

    let mut board = SkillsBoard::new(sim, adapter);
    board.set_entities(skills.entities());
    board.resize(container);
    board.set_mode(BoardMode::Gravity);

    let reloads = match (&args.scene, args.watch) {
        (Some(path), true) => Some(watcher::start(path).context("starting skill-set watcher")?),
        _ => None,
    };

    tracing::info!(
        balls = board.sim().balls().len(),
        width = container.width,
        height = container.height,
        adapter = ?board.adapter().kind(),
        "starting {} frames",
        args.frames
    );

    for frame in 0..args.frames {
        if let Some(watch) = &reloads {
            for path in watch.changes() {
                reload(&mut board, &path);
            }
        }

        if frame == args.frames / 2 {
            if let Some((dx, dy)) = args.flick {
                flick(&mut board, dx, dy)?;
            }
        }

        let report = board.frame(frame as f64 * CANONICAL_FRAME_MS);

        if (frame + 1) % LOG_EVERY == 0 {
            let balls = board.sim().balls();
            let settled = balls.iter().filter(|b| b.is_settled).count();
            tracing::info!(
                frame = frame + 1,
                settled,
                total = balls.len(),
                collisions = report.collisions,
                "frame complete"
            );
        }
    }

    tracing::info!(all_settled = board.sim().all_settled(), "run finished");
    for ball in board.sim().balls() {
        tracing::debug!(id = %ball.id, x = ball.pos.x, y = ball.pos.y, settled = ball.is_settled, "final state");
    }
    Ok(())
}

fn default_skill_set() -> SkillSet {
    SkillSet {
        technologies: DEFAULT_TECHNOLOGIES
            .iter()
            .map(|name| Technology {
                name: (*name).to_owned(),
                icon: None,
            })
            .collect(),
        ..SkillSet::default()
    }
}

/// Grab the first badge, drag it by `(dx, dy)` and let go.
fn flick(board: &mut SkillsBoard, dx: f64, dy: f64) -> Result<()> {
    let Some((id, at)) = board.sim().balls().first().map(|b| (b.id.clone(), b.pos)) else {
        return Ok(());
    };
    board.pointer_down(&id, at)?;
    board.pointer_move(at + Vec2::new(dx, dy))?;
    let thrown = board.pointer_up(at + Vec2::new(dx, dy))?;
    tracing::info!(%id, ?thrown, "flicked badge");
    Ok(())
}

fn reload(board: &mut SkillsBoard, path: &std::path::Path) {
    match SkillSet::from_path(path) {
        Ok(skills) => {
            tracing::info!(technologies = skills.technologies.len(), "skill set reloaded");
            board.set_tuning(skills.simulation_config(), skills.drag_config());
            if let Some(container) = skills.container() {
                board.resize(container);
            }
            board.set_entities(skills.entities());
        }
        Err(e) => tracing::error!("skill-set reload failed: {e:#}"),
    }
}
