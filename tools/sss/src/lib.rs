//! A tool that splits secrets into shares and joins them back.

use anyhow::{bail, Context, Error};
use clap::{ArgGroup, Args, Parser, Subcommand};
use log::debug;
use math_lib::conversions::decode_integer_to_string;
use num_bigint::BigUint;
use shamir_sharing::{
    codec,
    secret_sharer::{PrimeStrategy, ShamirSecretSharer},
    SecretShare,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod config;
pub mod reconstruct;

use crate::{config::Config, reconstruct::Reconstructor};

#[derive(Parser)]
#[clap(version, about = "A tool that splits secrets into shares any threshold of which rebuild the secret.")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a secret into shares.
    Split(SplitArgs),

    /// Join share files back into the secret.
    Join(JoinArgs),

    /// Reconstruct a secret from the shares listed in a YAML config file.
    Reconstruct {
        /// The path to the config file.
        config_path: PathBuf,
    },

    /// Print the contents of a share file.
    Inspect {
        /// The path to the share file.
        path: PathBuf,
    },
}

#[derive(Args)]
#[clap(group(ArgGroup::new("input").required(true).args(["secret", "integer"])))]
struct SplitArgs {
    /// A text secret.
    #[clap(short, long)]
    secret: Option<String>,

    /// An integer secret.
    #[clap(short, long)]
    integer: Option<BigUint>,

    /// The number of shares to generate, at most 255.
    #[clap(short = 'n', long)]
    total: u32,

    /// The number of shares needed to join the secret.
    #[clap(short = 'k', long)]
    threshold: usize,

    /// Pick a random prime instead of the smallest one above the secret.
    #[clap(long, default_value_t = false)]
    random_prime: bool,

    /// Write every share into `share-<index>.bin` in this directory instead of printing them.
    #[clap(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct JoinArgs {
    /// Print the secret as an integer rather than text.
    #[clap(short, long, default_value_t = false)]
    integer: bool,

    /// The share files.
    #[clap(required = true)]
    files: Vec<PathBuf>,
}

fn split(args: SplitArgs) -> Result<(), Error> {
    let strategy = if args.random_prime { PrimeStrategy::Random } else { PrimeStrategy::Next };
    let sharer = ShamirSecretSharer::new(args.total, args.threshold)?.with_prime_strategy(strategy);
    let shares = match (&args.secret, &args.integer) {
        (Some(secret), _) => sharer.split_str(secret)?,
        (None, Some(integer)) => sharer.split_integer(integer)?,
        (None, None) => bail!("either a text or an integer secret is required"),
    };
    debug!("Generated {} shares", shares.len());

    // Nothing is written unless every share encodes.
    let encoded = shares
        .iter()
        .map(|share| {
            let bytes = share.to_bytes().with_context(|| format!("failed to encode share {}", share.index()))?;
            Ok((share.index(), bytes))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir).context("failed to create output directory")?;
    }
    for (index, bytes) in encoded {
        match &args.output_dir {
            Some(output_dir) => {
                let path = output_dir.join(format!("share-{index}.bin"));
                fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
                println!("{}", path.display());
            }
            None => println!("{}", hex::encode(bytes)),
        }
    }
    Ok(())
}

fn load_share(path: &Path) -> Result<SecretShare, Error> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let share = codec::decode(&bytes).with_context(|| format!("invalid share file {}", path.display()))?;
    debug!("Loaded {share} from {}", path.display());
    Ok(share)
}

fn join(args: JoinArgs) -> Result<(), Error> {
    let shares = args.files.iter().map(|path| load_share(path)).collect::<Result<Vec<_>, _>>()?;
    let secret = shamir_sharing::join(&shares).context("failed to join shares")?;
    if args.integer {
        println!("{secret}");
    } else {
        let secret = decode_integer_to_string(&secret).context("secret is not text, try --integer")?;
        println!("{secret}");
    }
    Ok(())
}

fn reconstruct(config_path: PathBuf) -> Result<(), Error> {
    let config = Config::load(&config_path).context("failed to load config")?;
    println!("Recovering secret using prime {}", config.prime);
    let secret = Reconstructor.reconstruct(config)?;
    println!("Secret recovered is: {secret}");
    if let Ok(text) = decode_integer_to_string(&secret) {
        println!("Secret as text: {text}");
    }
    Ok(())
}

fn inspect(path: PathBuf) -> Result<(), Error> {
    let share = load_share(&path)?;
    println!("index: {}", share.index());
    println!("value: {}", share.value());
    println!("prime: {}", share.prime());
    Ok(())
}

/// The driver function that parses the arguments and runs the command.
pub fn driver() -> Result<(), Error> {
    let cli = Cli::parse();
    match cli.command {
        Command::Split(args) => split(args),
        Command::Join(args) => join(args),
        Command::Reconstruct { config_path } => reconstruct(config_path),
        Command::Inspect { path } => inspect(path),
    }
}
