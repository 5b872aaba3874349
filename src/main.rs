use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use folio::{config, css, date, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Site configuration for a personal static website")]
#[command(long_about = "\
Site configuration for a personal static website

Stock settings are built in. A config.toml in the project root overrides any
of them; tables merge key by key, arrays (menu, themes) replace.

  config.toml
  ├── [site]                  # author, title, description, lang, og_locale
  ├── [site.date]             # date locale + day/month/year options
  ├── [site.webmentions]      # canonical site link
  ├── [code]                  # highlighting themes, scrollbars
  │   └── [code.style_overrides]
  └── [[menu]]                # header/footer entries, in order

Run 'folio gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root containing config.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Validate config.toml without printing it
    Check,
    /// Print the resolved configuration
    Show {
        /// Print as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print the menu in display order
    Menu {
        /// Mark the entry that is active for this page path
        #[arg(long)]
        current: Option<String>,
    },
    /// Print the generated code-block CSS
    Css,
    /// Format a date (YYYY-MM-DD) with the configured date preference
    Date { date: NaiveDate },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.join(config::CONFIG_FILE).display());
            config::load_config(&cli.root)?;
            println!("==> Config is valid");
        }
        Command::Show { json } => {
            let site_config = config::load_config(&cli.root)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&site_config)?);
            } else {
                output::print_config_summary(&site_config, &cli.root);
            }
        }
        Command::Menu { current } => {
            let site_config = config::load_config(&cli.root)?;
            output::print_menu(&site_config.menu, current.as_deref());
        }
        Command::Css => {
            let site_config = config::load_config(&cli.root)?;
            println!("{}", css::generate_code_css(&site_config.code)?);
        }
        Command::Date { date: day } => {
            let site_config = config::load_config(&cli.root)?;
            println!("{}", date::format_date(day, &site_config.site.date)?);
        }
    }

    Ok(())
}
