use bls_signer::{
    curve::{AltBn128, Bls12_377, CurveSystem},
    export_key_file,
    hash_to_curve::hash_then_multiply::HashThenMultiply,
    hashers::Keccak256Hasher,
    import_public_key, sign_from_file, BLSError, BlsResult, KeyPair, PublicKey, Signature,
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};
use rand::rngs::OsRng;

fn cli() -> Command {
    let key = Arg::new("key")
        .long("key")
        .value_name("PATH")
        .help("Path of the JSON key file")
        .required(true);
    let msg = Arg::new("msg")
        .long("msg")
        .value_name("HEX")
        .help("Hex encoded message, without a 0x prefix")
        .required(true);
    let sig = Arg::new("sig")
        .long("sig")
        .num_args(2)
        .value_names(["X", "Y"])
        .help("Signature as two decimal affine coordinates")
        .required(true);

    Command::new("bls-sign")
        .about("BLS signatures with the keccak hash-then-multiply map to G1")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("curve")
                .long("curve")
                .value_name("CURVE")
                .help("Curve to sign on")
                .value_parser([AltBn128::NAME, Bls12_377::NAME])
                .default_value(AltBn128::NAME)
                .global(true),
        )
        .subcommand(
            Command::new("gen")
                .about("Generates a fresh key pair and writes it to a key file")
                .arg(key.clone()),
        )
        .subcommand(
            Command::new("sign")
                .about("Signs a message with the key in a key file")
                .arg(key.clone())
                .arg(msg.clone()),
        )
        .subcommand(
            Command::new("aggregate")
                .about("Sums signatures")
                .arg(sig.clone().action(ArgAction::Append)),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a signature against the public keys of one or more key files")
                .arg(key.action(ArgAction::Append))
                .arg(msg)
                .arg(sig),
        )
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    let result = match matches.get_one::<String>("curve").map(String::as_str) {
        Some(name) if name == Bls12_377::NAME => run::<Bls12_377>(&matches),
        _ => run::<AltBn128>(&matches),
    };

    if let Err(err) = result {
        error!("{:?}", err);
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
}

fn run<C: CurveSystem>(matches: &ArgMatches) -> BlsResult<()> {
    let hash_to_g1 = HashThenMultiply::<_, C>::new(&Keccak256Hasher);

    match matches.subcommand() {
        Some(("gen", m)) => {
            let keypair = KeyPair::<C>::generate(&mut OsRng)?;
            export_key_file(keypair.private_key(), keypair.public_key(), value(m, "key"))?;
            info!("generated {} key pair in {}", C::NAME, value(m, "key"));
            print_lines(&keypair.public_key().to_decimal_coords());
        }
        Some(("sign", m)) => {
            let sig = sign_from_file::<C, _, _>(value(m, "key"), value(m, "msg"), &hash_to_g1)?;
            print_lines(&sig.to_decimal_coords());
        }
        Some(("aggregate", m)) => {
            let coords = values(m, "sig");
            let sigs = coords
                .chunks(2)
                .map(Signature::<C>::from_decimal_coords)
                .collect::<BlsResult<Vec<_>>>()?;
            info!("aggregating {} signatures", sigs.len());
            print_lines(&Signature::aggregate(&sigs).to_decimal_coords());
        }
        Some(("verify", m)) => {
            let public_keys = values(m, "key")
                .into_iter()
                .map(import_public_key::<C, _>)
                .collect::<BlsResult<Vec<_>>>()?;
            let apk = PublicKey::aggregate(&public_keys);
            let message = hex::decode(value(m, "msg"))?;
            let sig = Signature::<C>::from_decimal_coords(&values(m, "sig"))?;
            apk.verify(&message, &sig, &hash_to_g1)?;
            println!("valid");
        }
        _ => {
            return Err(BLSError::ParseError(
                "unknown subcommand, see --help".to_string(),
            ))
        }
    }
    Ok(())
}

// clap enforces presence of required args
fn value<'a>(m: &'a ArgMatches, name: &str) -> &'a str {
    m.get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn values<'a>(m: &'a ArgMatches, name: &str) -> Vec<&'a str> {
    m.get_many::<String>(name)
        .map(|vals| vals.map(String::as_str).collect())
        .unwrap_or_default()
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
