//! Simulated map screen session
//!
//! Runs a complete screen lifecycle against the in-process collaborators:
//! create, apply the requested settings, ask for permission, wait for the
//! first fix and tear down. Useful for checking configuration files and for
//! watching the controller's log output.

use std::time::Duration;

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::config::GuideConfig;
use crate::coordinate::GeoPoint;
use crate::guide::errors::GuideResult;
use crate::guide::screen::MapScreen;
use crate::guide::state::LineColor;
use crate::sim::{RecordingRenderer, ScriptedLocationProvider, StaticPermissions};
use crate::utils::arg_utils::{get_f64, get_point, get_u32};
use crate::utils::progress::ProgressTracker;

/// Location queries answered without a fix unless `--fix-after` says otherwise
const DEFAULT_FIX_AFTER: u32 = 3;

/// Command for running a simulated screen session
pub struct SimulateCommand {
    /// Screen configuration
    config: GuideConfig,
    /// Position the simulated receiver eventually reports
    position: GeoPoint,
    /// Location queries answered with no fix first
    fix_after: u32,
    /// Whether the receiver never gets a fix
    no_fix: bool,
    /// Whether the permission request is refused
    deny: bool,
    heading: Option<f64>,
    length: Option<f64>,
    color: Option<LineColor>,
    follow: Option<bool>,
}

impl SimulateCommand {
    /// Create a new simulate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new SimulateCommand instance or an error
    pub fn new(args: &ArgMatches) -> GuideResult<Self> {
        let config = match args.get_one::<String>("config") {
            Some(path) => {
                info!("Loading configuration from {}", path);
                GuideConfig::from_file(path)?
            }
            None => GuideConfig::default(),
        };

        let position = get_point(args)?.unwrap_or(config.map.initial_center);

        let color = match args.get_one::<String>("color") {
            Some(name) => Some(LineColor::from_name(name)?),
            None => None,
        };

        Ok(SimulateCommand {
            config,
            position,
            fix_after: get_u32(args, "fix-after")?.unwrap_or(DEFAULT_FIX_AFTER),
            no_fix: args.get_flag("no-fix"),
            deny: args.get_flag("deny"),
            heading: get_f64(args, "heading")?,
            length: get_f64(args, "length")?,
            color,
            follow: if args.get_flag("no-follow") { Some(false) } else { None },
        })
    }

    async fn run_session(&self) -> GuideResult<()> {
        let fix = if self.no_fix { None } else { Some(self.position) };
        let location = ScriptedLocationProvider::new(fix, self.fix_after);
        let renderer = RecordingRenderer::new(self.config.map.initial_center);
        let permissions = StaticPermissions::new(false, !self.deny);

        let mut screen = MapScreen::create(&self.config, location.clone(), renderer.clone(), permissions);

        if let Some(heading) = self.heading {
            screen.set_heading(heading)?;
        }
        if let Some(length) = self.length {
            screen.set_length(length)?;
        }
        if let Some(color) = self.color {
            screen.set_color(color);
        }
        if let Some(follow) = self.follow {
            screen.set_follow_mode(follow);
        }

        if screen.request_permission().await {
            self.wait_for_fix(&screen, &location).await;
        }

        self.report(&screen);

        drop(screen);
        let log = renderer.snapshot();
        info!("Teardown complete: {} overlays left, renderer paused: {}", log.overlays.len(), log.paused);

        Ok(())
    }

    async fn wait_for_fix(
        &self,
        screen: &MapScreen<ScriptedLocationProvider, RecordingRenderer, StaticPermissions>,
        location: &ScriptedLocationProvider,
    ) {
        let progress = ProgressTracker::spinner("Waiting for location fix");
        let mut interval = tokio::time::interval(Duration::from_millis(100));

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    warn!("Interrupted, tearing down map screen");
                    break;
                }
                _ = interval.tick() => {
                    if !screen.is_polling() {
                        break;
                    }
                    progress.set_message(&format!("Waiting for location fix ({} queries)", location.queries()));
                }
            }
        }

        progress.finish_with(screen.fix_status().description());
    }

    fn report(&self, screen: &MapScreen<ScriptedLocationProvider, RecordingRenderer, StaticPermissions>) {
        let controller = screen.controller();
        let state = controller.state();

        println!("Status:   {}", controller.fix_status().description());
        println!("Heading:  {:.1} deg", state.heading);
        println!("Length:   {:.0} m", state.length);
        println!("Color:    {}", state.color);
        println!("Follow:   {}", state.follow_mode);
        if let Some(segment) = controller.segment() {
            println!("Start:    {:.8},{:.8}", segment.start.latitude, segment.start.longitude);
            println!("End:      {:.8},{:.8}", segment.end.latitude, segment.end.longitude);
        }
        println!("Publishes: {}", controller.publish_count());
    }
}

impl Command for SimulateCommand {
    fn execute(&self) -> GuideResult<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let local = tokio::task::LocalSet::new();

        local.block_on(&runtime, self.run_session())
    }
}
