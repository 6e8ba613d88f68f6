use clap::Parser;
use ghostcipher::{AlphabetRegistry, decode, encode, hide, reveal};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghostcipher")]
#[command(version)]
#[command(about = "Hide text in plain sight as invisible Unicode characters", long_about = None)]
struct Cli {
    /// Alphabet to use for encoding/decoding
    #[arg(short, long)]
    alphabet: Option<String>,

    /// File to read (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode invisible digits back to text
    #[arg(short, long, conflicts_with_all = ["hide", "reveal"])]
    decode: bool,

    /// Treat input as carrier text and append this secret, encoded
    #[arg(long, value_name = "SECRET", conflicts_with = "reveal")]
    hide: Option<String>,

    /// Reveal a secret of this length (in characters) from the input's tail
    #[arg(long, value_name = "LENGTH")]
    reveal: Option<usize>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabet configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    if cli.list {
        println!("Available alphabets:\n");
        for name in config.names() {
            let alphabet = config.alphabet(&name)?;
            let preview: Vec<String> = alphabet
                .digits()
                .iter()
                .map(|c| format!("U+{:04X}", *c as u32))
                .collect();
            let default_marker = if Some(name.as_str())
                == config.settings.default_alphabet.as_deref()
            {
                " (default)"
            } else {
                ""
            };
            println!("  {:<12}{}\n      {}", name, default_marker, preview.join(" "));
        }
        return Ok(());
    }

    let alphabet_name = cli
        .alphabet
        .or_else(|| config.settings.default_alphabet.clone())
        .unwrap_or_else(|| "ghost".to_string());
    let alphabet = config.alphabet(&alphabet_name)?;

    // Read input text
    let input = if let Some(file_path) = cli.file {
        fs::read_to_string(&file_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if let Some(secret) = cli.hide {
        // Carrier is taken as-is apart from one trailing newline from the shell.
        let carrier = input.trim_end_matches(['\r', '\n']);
        let combined = hide(carrier, &secret, &alphabet)?;
        println!("{}", combined);
    } else if let Some(length) = cli.reveal {
        let combined = input.trim_end_matches(['\r', '\n']);
        let secret = reveal(combined, length, &alphabet)?;
        io::stdout().write_all(secret.as_bytes())?;
    } else if cli.decode {
        let decoded = decode(input.trim(), &alphabet)?;
        io::stdout().write_all(decoded.as_bytes())?;
    } else {
        let encoded = encode(&input, &alphabet)?;
        println!("{}", encoded);
    }

    Ok(())
}
