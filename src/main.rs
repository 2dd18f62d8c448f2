// SPDX-License-Identifier: GPL-3.0-only

use camera_settings::app::utils::resolution_arg;
use camera_settings::app::{DialogApp, DialogFlags};
use camera_settings::config::CameraFacing;
use camera_settings::errors::AppResult;
use camera_settings::resolution::Resolution;
use clap::{Parser, Subcommand};
use cosmic::Application;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-settings")]
#[command(about = "Capture resolution and audio source settings for the COSMIC camera")]
#[command(version = camera_settings::constants::app_info::version())]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the resolution dialog (default)
    Dialog {
        /// Edit the front camera instead of the back camera
        #[arg(short, long)]
        front: bool,

        /// Open the video resolution picker immediately
        #[arg(long)]
        open_video: bool,

        /// Photo resolution offered by the camera (repeatable, e.g. 4032x3024)
        #[arg(short, long, value_parser = resolution_arg)]
        photo: Vec<Resolution>,

        /// Video resolution offered by the camera (repeatable, e.g. 1920x1080)
        #[arg(short, long, value_parser = resolution_arg)]
        video: Vec<Resolution>,
    },

    /// Print picker labels for resolutions, largest first
    Resolutions {
        #[arg(required = true, value_parser = resolution_arg)]
        resolutions: Vec<Resolution>,
    },

    /// Print the path for the next photo or video
    OutputPath {
        /// Name a video file instead of a photo
        #[arg(long)]
        video: bool,

        /// Directory to use instead of the configured save folder
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Check whether unprocessed audio capture is available
    AudioProbe,

    /// Measure display geometry and navigation bar height
    Screen {
        /// Use this usable display area instead of measuring (e.g. 1080x2214)
        #[arg(long, value_parser = resolution_arg)]
        usable: Option<Resolution>,

        /// Use this full display area instead of measuring (e.g. 1080x2340)
        #[arg(long, value_parser = resolution_arg)]
        real: Option<Resolution>,
    },
}

fn main() -> AppResult<()> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_settings=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dialog {
            front,
            open_video,
            photo,
            video,
        }) => run_dialog(DialogFlags {
            facing: if front {
                CameraFacing::Front
            } else {
                CameraFacing::Back
            },
            photo_resolutions: photo,
            video_resolutions: video,
            open_video_picker: open_video,
        }),
        Some(Commands::Resolutions { resolutions }) => cli::list_resolutions(&resolutions),
        Some(Commands::OutputPath { video, dir }) => {
            cli::print_output_path(DialogApp::APP_ID, video, dir)
        }
        Some(Commands::AudioProbe) => cli::probe_audio(),
        Some(Commands::Screen { usable, real }) => cli::print_screen(usable, real),
        None => run_dialog(DialogFlags::default()),
    }
}

fn run_dialog(flags: DialogFlags) -> AppResult<()> {
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    cosmic::app::run::<DialogApp>(settings, flags)?;

    Ok(())
}
