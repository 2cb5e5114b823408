use anyhow::Context;
use clap::{Parser, Subcommand};
use mediacodecs::{
    CodecToken, KnownCodec, Manifest, MimeAllowList, ParsedCodecInfo, TypeSupport,
    browser_supports_codec, codecs_from_default, mime_for_codec, muxer_supports_codec,
    parse_codecs_report, translate_legacy_codecs,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Inspect media codec strings (like the ones in HLS/DASH manifests)")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a codec string into video / audio / text codecs
    Parse {
        codecs: String,
        /// Output as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Print the MIME type for a codec string
    Mime { codecs: String },
    /// Rewrite legacy avc1.<profile>.<level> codecs into hex form
    Translate {
        #[arg(required = true)]
        codecs: Vec<String>,
    },
    /// Check platform and muxer support for a codec string
    Support {
        codecs: String,
        /// MIME string the platform should report as supported (repeatable)
        #[arg(long = "supported", value_name = "MIME")]
        supported: Vec<String>,
        /// JSON file holding an array of supported MIME strings
        #[arg(long, value_name = "PATH")]
        supported_file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Parse the codecs of the default rendition of an audio group
    DefaultAudio {
        /// JSON manifest with mediaGroups.AUDIO
        manifest: PathBuf,
        group: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct SupportInfo {
    codecs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mime: Option<String>,
    platform: Option<bool>,
    muxer: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    match args.cmd {
        Command::Parse { codecs, json } => {
            let report = parse_codecs_report(&codecs);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_info(&report.info);
                for d in &report.dropped {
                    println!("dropped: {d}");
                }
            }
        }
        Command::Mime { codecs } => match mime_for_codec(&codecs) {
            Some(mime) => println!("{mime}"),
            None => anyhow::bail!("empty codec string"),
        },
        Command::Translate { codecs } => {
            for c in translate_legacy_codecs(&codecs) {
                println!("{c}");
            }
        }
        Command::Support {
            codecs,
            supported,
            supported_file,
            json,
        } => {
            let platform = load_allow_list(supported, supported_file.as_deref())?;
            let info = SupportInfo {
                mime: mime_for_codec(&codecs).map(|m| m.to_string()),
                platform: platform
                    .as_ref()
                    .map(|p| browser_supports_codec(&codecs, Some(p as &dyn TypeSupport))),
                muxer: muxer_supports_codec(&codecs),
                codecs,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_support(&info);
            }
        }
        Command::DefaultAudio {
            manifest,
            group,
            json,
        } => {
            let m = Manifest::from_path(&manifest)
                .with_context(|| format!("loading manifest {}", manifest.display()))?;
            let info = codecs_from_default(&m, Some(&group));
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                match info {
                    Some(info) => print_info(&info),
                    None => println!("no default rendition in audio group {group:?}"),
                }
            }
        }
    }

    Ok(())
}

// No flags at all means "no platform check available".
fn load_allow_list(
    supported: Vec<String>,
    file: Option<&Path>,
) -> anyhow::Result<Option<MimeAllowList>> {
    if supported.is_empty() && file.is_none() {
        return Ok(None);
    }
    let mut types = supported;
    if let Some(path) = file {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let extra: Vec<String> = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        types.extend(extra);
    }
    log::debug!("platform allow-list has {} entries", types.len());
    Ok(Some(types.into_iter().collect()))
}

fn print_info(info: &ParsedCodecInfo) {
    if info.is_empty() {
        println!("no codecs recognized");
        return;
    }
    print_token("video", info.video.as_ref());
    print_token("audio", info.audio.as_ref());
    print_token("text", info.text.as_ref());
}

fn print_token(label: &str, token: Option<&CodecToken>) {
    let Some(t) = token else { return };
    let known = KnownCodec::from(t.typ.as_str());
    println!(
        "{:<6} {:<20} type={} details={:?} ({})",
        label,
        t.to_string(),
        t.typ,
        t.details,
        known.full_name()
    );
}

fn print_support(info: &SupportInfo) {
    println!("codecs:   {}", info.codecs);
    println!("mime:     {}", info.mime.as_deref().unwrap_or("-"));
    let platform = match info.platform {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown (no platform check)",
    };
    println!("platform: {platform}");
    println!("muxer:    {}", if info.muxer { "yes" } else { "no" });
}
