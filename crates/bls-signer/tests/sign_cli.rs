use bls_signer::{
    curve::AltBn128, export_key_file, hash_to_curve::KECCAK_HASH_TO_G1, import_key_file,
    import_public_key, sign_from_file, BLSError, PrivateKey, PublicKey, Signature,
};

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

const GOLDEN_SIG: [&str; 2] = [
    "8013361771754648776095976525555787231989640260358845802370075233855346253811",
    "7364353746731599170955327846875645246117848456781934828042726668891860983417",
];

fn key_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bls-sign-it-{}-{}.json", std::process::id(), name))
}

fn write_key(name: &str, sk: &str) -> PathBuf {
    let path = key_path(name);
    let sk = PrivateKey::<AltBn128>::from_decimal(sk).unwrap();
    export_key_file(&sk, &sk.to_public(), &path).unwrap();
    path
}

fn bls_sign(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bls-sign"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn key_file_to_signature() {
    let path = write_key("library", "12345");
    let sk = import_key_file::<AltBn128, _>(&path).unwrap();
    assert_eq!(sk.to_decimal(), "12345");

    let sig = sign_from_file::<AltBn128, _, _>(&path, "deadbeef", &*KECCAK_HASH_TO_G1).unwrap();
    assert_eq!(sig.to_decimal_coords(), GOLDEN_SIG);
    import_public_key::<AltBn128, _>(&path)
        .unwrap()
        .verify(&[0xde, 0xad, 0xbe, 0xef], &sig, &*KECCAK_HASH_TO_G1)
        .unwrap();
    fs::remove_file(&path).unwrap();
}

#[test]
fn aggregate_signature_of_two_key_files() {
    let a = write_key("agg_a", "12345");
    let b = write_key("agg_b", "67890");
    let hasher = &*KECCAK_HASH_TO_G1;
    let sig_a = sign_from_file::<AltBn128, _, _>(&a, "cafe", hasher).unwrap();
    let sig_b = sign_from_file::<AltBn128, _, _>(&b, "cafe", hasher).unwrap();

    let asig = Signature::aggregate([&sig_a, &sig_b]);
    let apk = PublicKey::aggregate(&[
        import_public_key::<AltBn128, _>(&a).unwrap(),
        import_public_key::<AltBn128, _>(&b).unwrap(),
    ]);
    apk.verify(&[0xca, 0xfe], &asig, hasher).unwrap();
    assert!(matches!(
        apk.verify(&[0xca, 0xff], &asig, hasher),
        Err(BLSError::VerificationFailed)
    ));
    fs::remove_file(&a).unwrap();
    fs::remove_file(&b).unwrap();
}

#[test]
fn cli_sign_prints_two_lines() {
    let path = write_key("cli_sign", "12345");
    let key = path.to_str().unwrap();
    let output = bls_sign(&["sign", "--key", key, "--msg", "deadbeef"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), GOLDEN_SIG);

    let output = bls_sign(&[
        "verify", "--key", key, "--msg", "deadbeef", "--sig", GOLDEN_SIG[0], GOLDEN_SIG[1],
    ]);
    assert!(output.status.success());

    let output = bls_sign(&[
        "verify", "--key", key, "--msg", "deadbeee", "--sig", GOLDEN_SIG[0], GOLDEN_SIG[1],
    ]);
    assert_eq!(output.status.code(), Some(17));
    fs::remove_file(&path).unwrap();
}

#[test]
fn cli_gen_then_sign() {
    let path = key_path("cli_gen");
    let key = path.to_str().unwrap();
    let output = bls_sign(&["gen", "--key", key]);
    assert!(output.status.success());
    let pk = stdout_lines(&output);
    assert_eq!(pk.len(), 4);
    assert_eq!(
        import_public_key::<AltBn128, _>(&path).unwrap().to_decimal_coords(),
        pk
    );

    let sk = import_key_file::<AltBn128, _>(&path).unwrap();
    assert!(!String::from_utf8_lossy(&output.stdout).contains(&sk.to_decimal()));
    let output = bls_sign(&["sign", "--key", key, "--msg", ""]);
    assert!(output.status.success());
    let expected = sk.sign(&[], &*KECCAK_HASH_TO_G1).unwrap();
    assert_eq!(stdout_lines(&output), expected.to_decimal_coords());
    fs::remove_file(&path).unwrap();
}

#[test]
fn cli_aggregate() {
    let a = PrivateKey::<AltBn128>::from_decimal("1").unwrap();
    let b = PrivateKey::<AltBn128>::from_decimal("2").unwrap();
    let sig_a = a.sign(b"m", &*KECCAK_HASH_TO_G1).unwrap().to_decimal_coords();
    let sig_b = b.sign(b"m", &*KECCAK_HASH_TO_G1).unwrap().to_decimal_coords();
    let output = bls_sign(&[
        "aggregate",
        "--sig",
        sig_a[0].as_str(),
        sig_a[1].as_str(),
        "--sig",
        sig_b[0].as_str(),
        sig_b[1].as_str(),
    ]);
    assert!(output.status.success());

    let three = PrivateKey::<AltBn128>::from_decimal("3").unwrap();
    let expected = three.sign(b"m", &*KECCAK_HASH_TO_G1).unwrap();
    assert_eq!(stdout_lines(&output), expected.to_decimal_coords());

    // not a curve point
    let output = bls_sign(&["aggregate", "--sig", "1", "1"]);
    assert_eq!(output.status.code(), Some(13));
}

#[test]
fn cli_exit_codes() {
    let missing = key_path("cli_missing");
    let output = bls_sign(&["sign", "--key", missing.to_str().unwrap(), "--msg", "00"]);
    assert_eq!(output.status.code(), Some(12));
    assert!(output.stdout.is_empty());

    let path = write_key("cli_bad_hex", "12345");
    let output = bls_sign(&["sign", "--key", path.to_str().unwrap(), "--msg", "0xdeadbeef"]);
    assert_eq!(output.status.code(), Some(14));
    assert!(output.stdout.is_empty());
    fs::remove_file(&path).unwrap();

    let output = bls_sign(&["sign", "--msg", "00"]);
    assert_eq!(output.status.code(), Some(2));
}
