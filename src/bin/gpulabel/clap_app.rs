use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!(-t --template <TEMPLATE> "Template to render")
        .long_help(
            "Template rendered with the supplied values. Overrides the preset and \
                    the template set in the configuration file.",
        )
        .conflicts_with("preset"),
    )
    .arg(
        arg!(-p --preset <INDEX> "Renders the preset with the given index.")
        .long_help(
            "Renders one of the configured presets (see the \"presets\" subcommand \
                    for the available indexes).",
        )
        .value_parser(value_parser!(usize)),
    )
    .arg(
        arg!(-g --gpu <PERCENT> "GPU usage percentage.")
        .long_help("Value used by the $g and $G variables (defaults to 0).")
        .value_parser(value_parser!(u8).range(0..=100)),
    )
    .arg(
        arg!(-v --vram <PERCENT> "VRAM usage percentage.")
        .long_help("Value used by the $v and $V variables (defaults to 0).")
        .value_parser(value_parser!(u8).range(0..=100))
        .conflicts_with("vram-used"),
    )
    .arg(
        arg!(--"vram-used" <BYTES> "Used VRAM in bytes.")
        .long_help("Used video memory. The VRAM percentage is computed against --vram-total.")
        .value_parser(value_parser!(u64))
        .requires("vram-total"),
    )
    .arg(
        arg!(--"vram-total" <BYTES> "Total VRAM in bytes.")
        .long_help("Total video memory. A total of 0 renders a VRAM usage of 0%.")
        .value_parser(value_parser!(u64))
        .requires("vram-used"),
    )
    .arg(
        arg!(-c --config <FILE> "Configuration file to use.")
        .long_help(
            "Reads the configuration from the given file instead of gpulabel.toml \
                    inside the configuration directory ($GPULABEL_CONFIG_DIR).",
        ),
    )
    .arg(
        arg!(-e --"escape-controls" "Shows new lines and carriage returns as escape codes.")
        .long_help("Prints the control characters produced by \\n and \\r as their escape codes."),
    )
    .arg(
        arg!(-n --"no-newline" "Supress new line after the generated label.")
        .long_help("Prevents writing a new line after the rendered label."),
    )
    .subcommand(
        Command::new("presets")
        .about("Lists the configured presets.")
        .long_about("Displays the configured presets along with the index used by --preset."),
    )
    .subcommand(
        Command::new("codes")
        .about("Lists the escape and variable codes.")
        .long_about("Displays the codes understood in label templates."),
    )
}
