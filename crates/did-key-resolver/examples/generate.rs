use did_key_resolver::{
    ContentType, DIDKeyClient, Generate2Options, GenerateOptions, ResolutionOptions,
    config::DIDKeyConfigBuilder, errors::DIDKeyError,
};
use clap::Parser;
use tracing_subscriber::filter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Key type to generate (ed25519, x25519, secp256k1, secp256r1, secp384r1, secp521r1)
    #[arg(short, long, default_value = "ed25519")]
    key_type: String,

    /// Hex encoded 32 byte seed
    #[arg(short, long)]
    seed: Option<String>,

    /// Generate a did:jwk instead of a did:key
    #[arg(short, long)]
    jwk: bool,

    /// Key id to embed when generating a did:jwk
    #[arg(long)]
    kid: Option<String>,

    /// Produce an application/did+ld+json document
    #[arg(short, long)]
    ld: bool,
}

#[tokio::main]
async fn main() -> Result<(), DIDKeyError> {
    // **************************************************************
    // *** Initial setup
    // **************************************************************
    let args = Args::parse();

    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    println!();
    println!(" ****************************** ");
    println!(" *  did:key Generate Example  * ");
    println!(" ****************************** ");
    println!();

    let client = DIDKeyClient::new(DIDKeyConfigBuilder::default().build());

    let generated = if args.jwk {
        client
            .generate2(&Generate2Options {
                key_type: args.key_type,
                seed: args.seed,
                kid: args.kid,
            })
            .await?
    } else {
        let options = match args.seed {
            Some(seed) => GenerateOptions::from_seed(hex::decode(seed).expect("Invalid hex seed")),
            None => GenerateOptions::Random,
        };
        let accept = if args.ld {
            ContentType::DidLdJson
        } else {
            ContentType::DidJson
        };
        client
            .generate(&args.key_type, options, Some(ResolutionOptions::new(accept)))
            .await?
    };

    println!(
        "Generated DID:\n{}",
        serde_json::to_string_pretty(&generated).unwrap()
    );

    Ok(())
}
