use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::format::FormatInfo;
use rust_qr_gen::encoder::geometry::{alignment_pattern_positions, raw_data_module_count};
use rust_qr_gen::encoder::version::VersionInfo;
use rust_qr_gen::{
    ECLevel, MaskPattern, QRCode, QrEncoder, Version, data_codeword_count, ec_block_info,
};

const QUIET_ZONE: usize = 4;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a symbol from data codewords and print it as text
    Encode {
        #[arg(long)]
        version: u8,
        #[arg(long, default_value = "M")]
        level: ECLevel,
        /// Fixed mask pattern (0-7); searched when omitted
        #[arg(long)]
        mask: Option<u8>,
        /// Data codewords as hex
        #[arg(long, conflicts_with = "zero", required_unless_present = "zero")]
        hex: Option<String>,
        /// Fill the data capacity with zero bytes
        #[arg(long)]
        zero: bool,
    },
    /// Print geometry and block structure for a version
    Info {
        #[arg(long)]
        version: u8,
    },
    /// Encode, then read the format and version fields back
    Verify {
        #[arg(long)]
        version: u8,
        #[arg(long, default_value = "M")]
        level: ECLevel,
        #[arg(long)]
        hex: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            version,
            level,
            mask,
            hex,
            zero,
        } => encode_cmd(version, level, mask, hex.as_deref(), zero),
        Command::Info { version } => info_cmd(version),
        Command::Verify {
            version,
            level,
            hex,
        } => verify_cmd(version, level, &hex),
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    if digits.len() % 2 != 0 {
        bail!("Hex data has an odd number of digits");
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).context("Hex data is not ASCII")?;
            u8::from_str_radix(pair, 16).with_context(|| format!("Invalid hex byte {pair:?}"))
        })
        .collect()
}

fn encode_cmd(
    version: u8,
    level: ECLevel,
    mask: Option<u8>,
    hex: Option<&str>,
    zero: bool,
) -> Result<()> {
    let version = Version::new(version)?;
    let data = match hex {
        Some(text) if !zero => parse_hex(text)?,
        _ => vec![0u8; data_codeword_count(version, level)],
    };

    let mut encoder = QrEncoder::new();
    if let Some(mask) = mask {
        encoder = encoder.mask(MaskPattern::try_from(mask)?);
    }
    let qr = encoder
        .encode(&data, version, level)
        .with_context(|| format!("Failed to encode version {version}-{level:?}"))?;

    print!("{}", render_text(&qr));
    println!(
        "version={} level={:?} mask={} size={}",
        qr.version,
        qr.error_correction,
        qr.mask_pattern.index(),
        qr.size()
    );
    Ok(())
}

fn info_cmd(version: u8) -> Result<()> {
    let version = Version::new(version)?;
    println!("Version {} ({}x{} modules)", version, version.size(), version.size());
    println!(
        "Alignment positions: {:?}",
        alignment_pattern_positions(version)
    );
    let raw = raw_data_module_count(version);
    println!("Raw data modules: {} ({} codewords, {} remainder bits)", raw, raw / 8, raw % 8);
    for level in ECLevel::ALL {
        let info = ec_block_info(version, level);
        println!(
            "  {:?}: {} data codewords, {} blocks x {} ECC codewords",
            level,
            data_codeword_count(version, level),
            info.num_blocks,
            info.ecc_per_block
        );
    }
    Ok(())
}

fn verify_cmd(version: u8, level: ECLevel, hex: &str) -> Result<()> {
    let version = Version::new(version)?;
    let data = parse_hex(hex)?;
    let qr = QrEncoder::new().encode(&data, version, level)?;

    let format = FormatInfo::extract(&qr.modules);
    let expected_format = FormatInfo::new(level, qr.mask_pattern);
    println!("Format: {:?} (expected {:?})", format, expected_format);
    let mut ok = format == Some(expected_format);

    if version.has_version_info() {
        let decoded = VersionInfo::extract(&qr.modules);
        println!("Version info: {:?}", decoded.map(|v| v.number()));
        ok &= decoded == Some(version);
    }

    if !ok {
        bail!("Read-back did not match the encoded symbol");
    }
    println!("OK");
    Ok(())
}

/// Two characters per module, black as full blocks, with a quiet zone
fn render_text(qr: &QRCode) -> String {
    let size = qr.size();
    let span = size + 2 * QUIET_ZONE;
    let mut out = String::with_capacity(span * (span * 2 * 3 + 1));
    for y in 0..span {
        for x in 0..span {
            let black = x >= QUIET_ZONE
                && y >= QUIET_ZONE
                && qr
                    .module_at(x - QUIET_ZONE, y - QUIET_ZONE)
                    .unwrap_or(false);
            out.push_str(if black { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
