use std::io::{IsTerminal, Write};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use gpulabel::{
    codes,
    config::MainConfig,
    debug,
    error::*,
    metrics::MetricsSnapshot,
    monitor::LabelMonitor,
    transforms::{ControlEscaper, LineHandler, Pipeline},
};
use nu_ansi_term::Color::{Green, Yellow};

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Builds the metrics snapshot from the command line values. The VRAM
    /// percentage is derived from the memory sizes when they are supplied.
    fn build_metrics(&self) -> MetricsSnapshot {
        let gpu = self.matches.get_one::<u8>("gpu").copied().unwrap_or(0);
        let used = self.matches.get_one::<u64>("vram-used").copied();
        let total = self.matches.get_one::<u64>("vram-total").copied();

        match (used, total) {
            (Some(used), Some(total)) => MetricsSnapshot::from_usage(u32::from(gpu), used, total),
            _ => {
                let vram = self.matches.get_one::<u8>("vram").copied().unwrap_or(0);
                MetricsSnapshot::new(i64::from(gpu), i64::from(vram))
            }
        }
    }

    /// Selects the template to render using the following order :
    ///
    /// - The template supplied with --template
    /// - The preset selected with --preset
    /// - The template set in the configuration file (or the built-in default)
    fn select_template<'a>(&'a self, config: &'a MainConfig) -> Result<&'a str> {
        if let Some(template) = self.matches.get_one::<String>("template") {
            debug!("Using template from the command line");
            return Ok(template.as_str());
        }
        if let Some(index) = self.matches.get_one::<usize>("preset") {
            debug!("Using preset {}", index);
            return config.preset(*index);
        }
        Ok(config.format.template.as_str())
    }

    /// Builds the transforms applied to the rendered label before printing it
    fn build_pipeline(&self) -> Pipeline {
        let pipeline = Pipeline::new();
        let pipeline = if self.matches.get_flag("escape-controls") {
            pipeline.register(ControlEscaper)
        } else {
            pipeline
        };
        pipeline.register(LineHandler::new(self.matches.get_flag("no-newline")))
    }

    /// Renders the label once and writes it to the standard output.
    ///
    /// # Returns
    /// `Ok(true)` when the label was rendered or rendering is disabled in the
    /// configuration.
    fn render(&self, config: &MainConfig) -> Result<bool> {
        let template = self.select_template(config)?;
        let metrics = self.build_metrics();
        debug!(
            "Rendering \"{}\" with gpu={} vram={}",
            template, metrics.primary_percent, metrics.secondary_percent
        );

        let monitor = LabelMonitor::new(Some(template.to_string()), config.format.enabled);
        if let Some(label) = monitor.update(&metrics)? {
            let output = self.build_pipeline().process(&label)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(output.as_bytes())?;
            handle.flush()?;
        }
        Ok(true)
    }

    fn list_presets(&self, config: &MainConfig) -> Result<bool> {
        if config.format.presets.is_empty() {
            println!("{}", Yellow.paint("No presets configured"));
            return Ok(true);
        }
        for (index, preset) in config.format.presets.iter().enumerate() {
            println!("{} {}", Green.paint(format!("[{}]", index)), preset);
        }
        Ok(true)
    }

    fn list_codes(&self) -> Result<bool> {
        for info in codes::reference() {
            println!(
                "{}{}{}",
                Green.paint(format!("{:<5}", info.syntax)),
                Yellow.paint(format!("{:<10}", info.kind.to_string())),
                info.description
            );
        }
        Ok(true)
    }

    /// Start the application, bootstraps the configuration and runs the requested command.
    ///
    /// # Returns
    /// A `Result` indicating whether the application ran successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new(self.matches.get_one::<String>("config").map(|s| s.as_str()))?;
        let config = bootstrap.get_config();

        match self.matches.subcommand() {
            Some(("presets", _)) => self.list_presets(config),
            Some(("codes", _)) => self.list_codes(),
            Some((cmd, _)) => Err(Error::ArgsProcessingError(format!(
                "Invalid subcommand provided \"{}\"",
                cmd
            ))),
            None => self.render(config),
        }
    }
}
