use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use huffcode::{CompressionStats, Huffman, symbol_label};
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Build a Huffman code for each input string, then encode and decode it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Strings to process. Prompts for lines on stdin when none are given.
    text: Vec<String>,

    /// Also print the tree of each input
    #[arg(short, long)]
    tree: bool,

    /// More logging: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("initialise logger")?;

    let mut out = io::stdout().lock();
    writeln!(out, "Huffman Coding Program")?;

    if args.text.is_empty() {
        interactive(&mut io::stdin().lock(), &mut out, args.tree)
    } else {
        batch(&args.text, &mut out, args.tree)
    }
}

fn batch(texts: &[String], out: &mut impl Write, show_tree: bool) -> Result<()> {
    let mut failures = 0;
    for text in texts {
        if let Err(e) = cycle(text.as_bytes(), out, show_tree) {
            error!("{e:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs failed", texts.len());
    }
    Ok(())
}

fn interactive(input: &mut impl BufRead, out: &mut impl Write, show_tree: bool) -> Result<()> {
    loop {
        write!(out, "\nEnter a string: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };

        // A failed cycle is reported and the next one starts fresh.
        if let Err(e) = cycle(&line, out, show_tree) {
            error!("{e:#}");
        }

        write!(
            out,
            "\nWould you like to enter another string? ('y' to continue. Press any other key to exit program.) "
        )?;
        out.flush()?;
        if !matches!(read_answer(input)?, Some(b'y' | b'Y')) {
            break;
        }
    }

    writeln!(out, "Exiting program.")?;
    Ok(())
}

/// One line without its terminator, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line).context("read line")? == 0 {
        return Ok(None);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// First non-blank byte of the answer, skipping blank lines, or `None` at end of input.
fn read_answer(input: &mut impl BufRead) -> Result<Option<u8>> {
    while let Some(line) = read_line(input)? {
        if let Some(&first) = line.trim_ascii_start().first() {
            return Ok(Some(first));
        }
    }
    Ok(None)
}

fn cycle(input: &[u8], out: &mut impl Write, show_tree: bool) -> Result<()> {
    info!("processing {} bytes", input.len());
    let huffman = Huffman::from_bytes(input);

    writeln!(out, "\nCharacter Frequency Table:")?;
    writeln!(out, "{:<20}Frequency", "Character")?;
    for (symbol, count) in huffman.frequencies().iter() {
        writeln!(out, "{:<20}{count}", symbol_label(symbol))?;
    }

    if show_tree {
        write!(out, "\nHuffman Tree:\n{}", huffman.tree())?;
    }

    writeln!(out, "\nHuffman Codes:")?;
    writeln!(out, "{:<20}Huffman Code", "Character")?;
    for (symbol, code) in huffman.codebook().iter() {
        writeln!(out, "{:<20}{code}", symbol_label(symbol))?;
    }

    writeln!(out, "\nOriginal string: {}", String::from_utf8_lossy(input))?;

    let encoded = huffman.encode(input).context("encode input")?;
    writeln!(out, "\nEncoded string: {encoded}")?;

    let stats = CompressionStats::new(input, &encoded);
    writeln!(out, "\nCompression analysis:")?;
    writeln!(out, "Original string size (in bits): {} bits", stats.original_bits)?;
    writeln!(out, "Encoded string size (in bits): {} bits", stats.encoded_bits)?;
    if let Some(ratio) = stats.ratio() {
        writeln!(out, "Compression ratio: {:.1}%", ratio * 100.0)?;
    }

    let decoded = huffman.decode(&encoded).context("decode encoded stream")?;
    writeln!(out, "\nDecoded string: {}", String::from_utf8_lossy(&decoded))?;
    ensure!(decoded == input, "decoded output differs from the input");

    Ok(())
}
