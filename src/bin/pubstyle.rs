use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pubstyle::models::{AspectRatio, FontChoice, FontFamily};
use pubstyle::palette::{Hue, Palette};
use pubstyle::profile::{LegendLocation, LineStyle, RelativeSize};
use pubstyle::viz::{MarkerShape, Series};
use pubstyle::{StyleConfigurator, StyleProfile, StyleRequest, config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pubstyle",
    version,
    about = "Derive publication-ready chart styles and render styled figures"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the style profile derived from a request as JSON.
    Profile(ProfileArgs),
    /// List palette colors.
    Palette(PaletteArgs),
    /// Render the demo figure (line + scatter) and export it as SVG.
    Demo(DemoArgs),
}

/// Request fields; flags override values loaded with --config.
#[derive(Args, Debug)]
struct RequestArgs {
    /// JSON file with a style request (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base font size in points (default 12).
    #[arg(long)]
    font_size: Option<f64>,
    /// Font family: serif or sans-serif.
    #[arg(long)]
    font_family: Option<FontFamily>,
    /// Font name, or "default" for the family's fallback list.
    #[arg(long)]
    font: Option<String>,
    /// Figures side by side across the page (1, 2 or 3).
    #[arg(long)]
    columns: Option<u8>,
    /// Usable page width in centimeters (default 16).
    #[arg(long)]
    width_cm: Option<f64>,
    /// Aspect ratio as W:H (default 6.4:4.8).
    #[arg(long)]
    aspect: Option<AspectRatio>,
    /// Figure dpi (default 96).
    #[arg(long)]
    dpi: Option<u32>,
}

impl RequestArgs {
    fn to_request(&self) -> Result<StyleRequest> {
        let mut req = match &self.config {
            Some(path) => config::load_request(path)?,
            None => StyleRequest::default(),
        };
        if let Some(v) = self.font_size {
            req.font_size = v;
        }
        if let Some(v) = self.font_family {
            req.font_family = v;
        }
        if let Some(v) = &self.font {
            req.font_name = FontChoice::from(v.as_str());
        }
        if let Some(v) = self.columns {
            req.columns_per_page = v;
        }
        if let Some(v) = self.width_cm {
            req.page_width_length = v;
        }
        if let Some(v) = self.aspect {
            req.aspect_ratio = v;
        }
        if let Some(v) = self.dpi {
            req.dpi = v;
        }
        Ok(req)
    }
}

#[derive(Args, Debug)]
struct ProfileArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Also write the profile to this JSON file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Only list one hue (e.g. green, black, lightgreen).
    #[arg(long)]
    hue: Option<String>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Export name (file stem).
    #[arg(long, default_value = "demo")]
    name: String,
    /// Export directory.
    #[arg(long, default_value = "export")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Profile(args) => cmd_profile(args),
        Command::Palette(args) => cmd_palette(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_profile(args: ProfileArgs) -> Result<()> {
    let req = args.request.to_request()?;
    let profile = StyleProfile::from_request(&req)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    if let Some(path) = args.out.as_ref() {
        config::save_profile(&profile, path)?;
        eprintln!("Saved profile to {}", path.display());
    }
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> Result<()> {
    let palette = Palette::corporate();
    match args.hue.as_deref() {
        Some(name) => {
            let hue = Hue::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unknown hue: {}", name))?;
            for (name, color) in palette.shades(hue) {
                println!("{:<14} {}", name, color);
            }
        }
        None => {
            for (name, color) in palette.iter() {
                println!("{:<14} {}", name, color);
            }
        }
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let mut req = args.request.to_request()?;
    req.mark_for_export = true;
    req.export_name = args.name.clone();

    let mut session = StyleConfigurator::new();
    session.apply(&req)?;

    let green = Palette::corporate()
        .get("green")
        .ok_or_else(|| anyhow::anyhow!("palette has no green"))?;
    let xs = [0.1, 0.2, 0.3, 0.4];
    session
        .figure()
        .add(
            Series::line(xs.iter().map(|&x| (x, x)))
                .line_style(LineStyle::Dashed)
                .label("Line"),
        )
        .add(
            Series::scatter(xs.iter().map(|&x| (x, x)))
                .marker(MarkerShape::Circle)
                .color(green)
                .edge(pubstyle::palette::Rgba::BLACK)
                .label("Scatter"),
        )
        .x_label("Publication ready label x /-")
        .y_label("Publication ready label y /-")
        .x_limits(Some(0.0), Some(0.5))
        .y_limits(None, Some(0.5))
        .legend(LegendLocation::LowerLeft, Some(RelativeSize::Small));

    match session.export_latest(&args.out_dir)? {
        Some(path) => eprintln!("Wrote figure to {}", path.display()),
        None => eprintln!("Nothing to export"),
    }
    Ok(())
}
