//! Flexion joint bending CLI.
//!
//! Provides three modes of operation:
//! - `run`: Drive one bent joint through a number of ticks and print every
//!   limiter pass
//! - `sweep`: Print the clamped target for a range of bends
//! - `info`: Print workspace crate versions

use std::path::PathBuf;
use std::process::ExitCode;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use clap::{Parser, Subcommand};

use flexion_bend::prelude::*;
use flexion_core::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Soft joint bending limiter.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bend one joint and run the limiter on the selected tick source.
    Run {
        /// Bending angle in degrees (overrides the config file).
        #[arg(short, long)]
        angle: Option<f32>,

        /// Ticks to skip between limiter passes (overrides the config file).
        #[arg(short, long)]
        delay: Option<u32>,

        /// Tick source driving the limiter (overrides the config file).
        #[arg(short, long)]
        source: Option<TickSource>,

        /// Number of ticks to run.
        #[arg(short, long, default_value_t = 20)]
        ticks: u32,

        /// TOML file with bending settings.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Steady bend in degrees applied about the joint's primary axis.
        #[arg(short, long, default_value_t = 10.0, allow_hyphen_values = true)]
        load: f32,

        /// Enable debug logging.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the clamped target for bends from `--from` to `--to`.
    Sweep {
        /// Bending angle in degrees.
        #[arg(short, long, default_value_t = BendingSettings::default().bending_angle())]
        angle: f32,

        /// First bend in degrees.
        #[arg(long, default_value_t = -30.0, allow_hyphen_values = true)]
        from: f32,

        /// Last bend in degrees.
        #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
        to: f32,

        /// Step between bends in degrees.
        #[arg(long, default_value_t = 5.0)]
        step: f32,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

struct RunOptions {
    angle: Option<f32>,
    delay: Option<u32>,
    source: Option<TickSource>,
    ticks: u32,
    config: Option<PathBuf>,
    load: f32,
    verbose: bool,
}

fn load_settings(options: &RunOptions) -> Result<BendingSettings, FlexionError> {
    let mut settings = match &options.config {
        Some(path) => BendingSettings::from_file(path)?,
        None => BendingSettings::default(),
    };
    if let Some(angle) = options.angle {
        settings.set_bending_angle(angle);
    }
    let delay = options.delay.unwrap_or(settings.iteration_delay);
    let source = options.source.unwrap_or(settings.tick_source);
    settings.set_physics_settings(source, delay);
    Ok(settings)
}

fn run_bend(options: &RunOptions) -> Result<(), FlexionError> {
    let settings = load_settings(options)?;
    println!(
        "bending_angle={:.2}, iteration_delay={}, tick_source={}, load={:.2}",
        settings.bending_angle(),
        settings.iteration_delay,
        settings.tick_source,
        options.load
    );

    let mut app = App::new();
    if options.verbose {
        app.add_plugins(LogPlugin {
            level: Level::DEBUG,
            ..default()
        });
    }
    app.add_plugins(TransformPlugin);
    app.add_plugins(FlexionCorePlugin);
    app.add_plugins(FlexionBendPlugin);
    app.finish();
    app.cleanup();

    // Capture the rest pose at identity, then apply the load.
    let source = settings.tick_source;
    let world = app.world_mut();
    let anchor = world.spawn(Transform::default()).id();
    let body = world.spawn_empty().id();
    let joint = world.spawn(BendingJoint::new(body, anchor)).id();

    let mut bending = JointBending::new(settings);
    bending.initialize([(joint, Quat::IDENTITY, Quat::IDENTITY)]);
    world.entity_mut(body).insert((
        Transform::from_rotation(Quat::from_rotation_x(options.load.to_radians())),
        bending,
    ));

    for tick in 1..=options.ticks {
        if let Some(mut joint) = app.world_mut().get_mut::<BendingJoint>(joint) {
            joint.target_rotation = Quat::IDENTITY;
        }

        let before = passes(&app, body);
        app.world_mut().run_schedule(PostUpdate);
        match source {
            TickSource::Visual => app.world_mut().run_schedule(Update),
            TickSource::Physics => app.world_mut().run_schedule(FixedUpdate),
        }

        if passes(&app, body) > before
            && let Some(joint) = app.world().get::<BendingJoint>(joint)
        {
            let angles = to_signed_euler_angles(joint.target_rotation);
            println!(
                "tick {tick}: target=({:.3}, {:.3}, {:.3})",
                angles.x, angles.y, angles.z
            );
        }
    }

    if let Some(bending) = app.world().get::<JointBending>(body) {
        let stats = bending.stats();
        println!(
            "\ntotal: ticks={}, passes={}, joint_updates={}, clamped_axes={}",
            options.ticks, stats.passes, stats.joint_updates, stats.clamped_axes
        );
    }
    Ok(())
}

fn passes(app: &App, body: Entity) -> u64 {
    app.world()
        .get::<JointBending>(body)
        .map_or(0, |bending| bending.stats().passes)
}

fn run_sweep(angle: f32, from: f32, to: f32, step: f32) {
    let limit = flexion_core::config::clamp_bending_angle(angle);
    if step <= 0.0 || from > to {
        eprintln!("sweep needs from <= to and a positive step");
        return;
    }
    println!("bending_angle={limit:.2}");
    println!("{:>10} {:>10} {:>8}", "bend", "target", "clamped");

    let mut bend = from;
    while bend <= to {
        let current = from_signed_euler_angles(Vec3::new(bend, 0.0, 0.0));
        let clamped = clamp_orientations(current, Quat::IDENTITY, limit);
        println!(
            "{bend:>10.2} {:>10.2} {:>8}",
            clamped.angles.x,
            clamped.any_overridden()
        );
        bend += step;
    }
}

fn run_info() {
    println!("flexion v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  flexion-core       {}", env!("CARGO_PKG_VERSION"));
    println!("  flexion-bend-core  {}", env!("CARGO_PKG_VERSION"));
    println!("  flexion-bend       {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("max bending angle: {MAX_BENDING_ANGLE}");
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            angle,
            delay,
            source,
            ticks,
            config,
            load,
            verbose,
        }) => run_bend(&RunOptions {
            angle,
            delay,
            source,
            ticks,
            config,
            load,
            verbose,
        }),
        Some(Commands::Sweep {
            angle,
            from,
            to,
            step,
        }) => {
            run_sweep(angle, from, to, step);
            Ok(())
        }
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => {
            // Default: one run with default settings
            run_bend(&RunOptions {
                angle: None,
                delay: None,
                source: None,
                ticks: 20,
                config: None,
                load: 10.0,
                verbose: false,
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
