use std::path::PathBuf;
use std::str::FromStr;

use glint::highlight::lexer::TokenizedBuffer;
use glint::highlight::source::SourceBuffer;
use glint::snippet::{render_snippet, BackgroundName, Language, SnippetSettings, ThemeName};
use glint::Error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    glint - heuristic syntax highlighting and palette generation

    USAGE:
        glint highlight [OPTIONS] FILENAME
        glint palette --vividness V --hue H [--format FORMAT]

    HIGHLIGHT OPTIONS:
        --format FORMAT     Output format, one of 'tokens', 'json', 'html', or 'snippet'.
                            Defaults to 'html'.
        --config FILE       A JSON file of snippet settings, used by the 'snippet' format.
        --theme THEME       Overrides the snippet theme, for example 'dracula'.
        --background BG     Overrides the snippet background, for example 'blue'.
        --language LANG     Overrides the snippet language label, for example 'python'.
        --quiet             If present, all non-error output is suppressed.

    PALETTE OPTIONS:
        --vividness V       Color intensity from 0 to 100.
        --hue H             Base hue in degrees.
        --format FORMAT     Output format, one of 'css', 'json', or 'hex'. Defaults to 'css'.

    ARGS:
        FILENAME            The path to the file to highlight, or supply '-' to take input from
                            stdin.

    Logging goes to stderr and is configured with the RUST_LOG environment variable.
";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum HighlightFormat {
    Tokens,
    Json,
    #[default]
    Html,
    Snippet,
}

impl FromStr for HighlightFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<HighlightFormat, Error> {
        match s {
            "tokens" => Ok(HighlightFormat::Tokens),
            "json" => Ok(HighlightFormat::Json),
            "html" => Ok(HighlightFormat::Html),
            "snippet" => Ok(HighlightFormat::Snippet),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum PaletteFormat {
    #[default]
    Css,
    Json,
    Hex,
}

impl FromStr for PaletteFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<PaletteFormat, Error> {
        match s {
            "css" => Ok(PaletteFormat::Css),
            "json" => Ok(PaletteFormat::Json),
            "hex" => Ok(PaletteFormat::Hex),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq)]
struct HighlightArgs {
    format: HighlightFormat,
    config: Option<PathBuf>,
    theme: Option<ThemeName>,
    background: Option<BackgroundName>,
    language: Option<Language>,
    quiet: bool,
    source_file: PathBuf,
}

#[derive(Debug, PartialEq)]
struct PaletteArgs {
    vividness: f64,
    hue: f64,
    format: PaletteFormat,
}

#[derive(Debug, PartialEq)]
enum Command {
    Highlight(HighlightArgs),
    Palette(PaletteArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args().and_then(|command| match command {
        Command::Highlight(args) => highlight(args),
        Command::Palette(args) => palette(args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn highlight(args: HighlightArgs) -> Result<(), Error> {
    let source = if args.source_file.as_os_str() == "-" {
        SourceBuffer::new_from_reader(&mut std::io::stdin().lock(), "<stdin>")?
    } else {
        SourceBuffer::new_from_file(&args.source_file)?
    };
    let tb = TokenizedBuffer::tokenize(&source);

    if args.quiet {
        return Ok(());
    }

    match args.format {
        HighlightFormat::Tokens => {
            println!("TokenizedBuffer [");
            tb.print_tokens();
            println!("]");
        }
        HighlightFormat::Json => println!("{}", serde_json::to_string_pretty(tb.tokens())?),
        HighlightFormat::Html => println!("{}", glint::render(tb.tokens())),
        HighlightFormat::Snippet => {
            let mut settings = match &args.config {
                Some(path) => SnippetSettings::load(path)?,
                None => SnippetSettings::default(),
            };
            if let Some(theme) = args.theme {
                settings.theme = theme;
            }
            if let Some(background) = args.background {
                settings.background = background;
            }
            if let Some(language) = args.language {
                settings.language = language;
            }
            print!("{}", render_snippet(&tb, &settings));
        }
    }
    Ok(())
}

fn palette(args: PaletteArgs) -> Result<(), Error> {
    let palette = glint::generate_palette(args.vividness, args.hue);
    match args.format {
        PaletteFormat::Css => print!("{}", palette.to_css()),
        PaletteFormat::Json => println!("{}", serde_json::to_string_pretty(&palette)?),
        PaletteFormat::Hex => {
            for (name, color) in palette.entries() {
                println!("{:<14} {}", name, color.to_hex());
            }
        }
    }
    Ok(())
}

fn parse_args() -> Result<Command, Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let command = match pargs.subcommand()?.as_deref() {
        Some("highlight") => Command::Highlight(HighlightArgs {
            format: pargs.opt_value_from_str("--format")?.unwrap_or_default(),
            config: pargs.opt_value_from_os_str("--config", parse_path)?,
            theme: pargs.opt_value_from_str("--theme")?,
            background: pargs.opt_value_from_str("--background")?,
            language: pargs.opt_value_from_str("--language")?,
            quiet: pargs.contains("--quiet"),
            source_file: pargs.free_from_os_str(parse_path)?,
        }),
        Some("palette") => Command::Palette(PaletteArgs {
            vividness: pargs.value_from_str("--vividness")?,
            hue: pargs.value_from_str("--hue")?,
            format: pargs.opt_value_from_str("--format")?.unwrap_or_default(),
        }),
        _ => {
            print!("{}", HELP);
            std::process::exit(1);
        }
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(command)
}

fn parse_path(s: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(s.into())
}
