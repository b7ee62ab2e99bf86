use clap::Parser;
use inkline::{
    Color, Context, InklineError, LayoutReport, ParseOptions, Renderer, TrueTypeFont, parse_markup,
};

/// Lay out inline markup with a real font and print the fragments as JSON.
#[derive(Parser, Debug)]
#[command(name = "inkline", version)]
struct Cli {
    /// The markup to lay out, e.g. "Hello {{color:red}}{{user}}"
    markup: String,

    /// Font file (TTF/OTF) to use as the default font
    #[arg(long, conflicts_with = "family")]
    font: Option<std::path::PathBuf>,

    /// Installed font family to use as the default font
    #[arg(long)]
    family: Option<String>,

    /// Name to register the default font under (defaults to its family name)
    #[arg(long)]
    font_name: Option<String>,

    /// Point size the font is opened at
    #[arg(long, default_value_t = 24)]
    point_size: u32,

    /// Register a string: KEY=VALUE (repeatable)
    #[arg(long = "string", value_parser = parse_key_value)]
    strings: Vec<(String, String)>,

    /// Register a color: KEY=#RRGGBB[AA] (repeatable)
    #[arg(long = "color", value_parser = parse_key_value)]
    colors: Vec<(String, String)>,

    /// Register a point size: KEY=PT (repeatable)
    #[arg(long = "size", value_parser = parse_key_value)]
    sizes: Vec<(String, String)>,

    /// Treat literal newlines in the markup as line breaks
    #[arg(long)]
    newlines: bool,

    #[arg(long, default_value = inkline_markup::DEFAULT_LEFT_DELIMITER)]
    left_delimiter: String,

    #[arg(long, default_value = inkline_markup::DEFAULT_RIGHT_DELIMITER)]
    right_delimiter: String,

    /// Print the parsed command list instead of laying it out
    #[arg(long)]
    commands: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn load_font(cli: &Cli) -> Result<TrueTypeFont, InklineError> {
    if let Some(path) = &cli.font {
        return Ok(TrueTypeFont::open(path, cli.point_size)?);
    }

    #[cfg(feature = "system-fonts")]
    if let Some(family) = &cli.family {
        return Ok(inkline::SystemFontLibrary::new().load(family, cli.point_size)?);
    }

    Err(InklineError::InvalidArgument(
        "a font is required: pass --font <PATH> or --family <NAME>".to_string(),
    ))
}

fn build_context(cli: &Cli) -> Result<Context, InklineError> {
    let mut ctx = Context::new();
    let font = load_font(cli)?;
    let name = ctx.register_font(font.into_handle(), cli.font_name.as_deref())?;
    log::info!("Default font registered as '{}'", name);

    ctx.register_css_colors();
    for (key, value) in &cli.strings {
        ctx.register_string(key.as_str(), value.as_str())?;
    }
    for (key, value) in &cli.colors {
        let color: Color = value.parse().map_err(InklineError::InvalidArgument)?;
        ctx.register_color(key.as_str(), color)?;
    }
    for (key, value) in &cli.sizes {
        let pt: u32 = value
            .parse()
            .map_err(|e| InklineError::InvalidArgument(format!("size '{}': {}", key, e)))?;
        ctx.register_size(key.as_str(), pt)?;
    }
    Ok(ctx)
}

fn main() -> Result<(), InklineError> {
    env_logger::init();
    let cli = Cli::parse();

    let options = ParseOptions::with_delimiters(&cli.left_delimiter, &cli.right_delimiter)
        .newline_as_command(cli.newlines);
    let list = parse_markup(&cli.markup, &options)?;

    if cli.commands {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let ctx = build_context(&cli)?;
    let mut renderer = Renderer::new(&ctx);
    renderer.execute(&list)?;

    println!("{}", LayoutReport::capture(&renderer).to_json()?);
    Ok(())
}
