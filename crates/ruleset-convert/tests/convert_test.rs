//! End-to-end conversion tests against temporary directories.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;
use ruleset_config::ConvertConfig;
use ruleset_convert::{ConvertError, convert};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn config(mix: bool, version: u8) -> ConvertConfig {
    ConvertConfig {
        output: None,
        mix,
        version,
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

fn file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

const PROVIDER: &str = "\
payload:
  - DOMAIN-SUFFIX,example.com
  - DOMAIN,foo.org
  - DOMAIN,*.example.net
  - IP-CIDR,10.0.0.0/8,no-resolve
  - DST-PORT,443
  - SRC-IP-CIDR,192.168.1.0/24
  - PROCESS-NAME,curl
  - AND,((DOMAIN,a.com),(DST-PORT,80))
  - GEOIP,CN
";

#[test]
fn split_mode_writes_one_pair_per_category() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "ads.yaml", PROVIDER);

    let written = convert(&source, &config(false, 3)).unwrap();
    assert_eq!(written.len(), 10);
    assert_eq!(
        file_names(&dir),
        vec![
            "ads-ip-v3.json",
            "ads-ip-v3.srs",
            "ads-port-v3.json",
            "ads-port-v3.srs",
            "ads-process-v3.json",
            "ads-process-v3.srs",
            "ads-site-v3.json",
            "ads-site-v3.srs",
            "ads-src-ip-v3.json",
            "ads-src-ip-v3.srs",
            "ads.yaml",
        ]
    );

    let site = read_json(&dir.path().join("ads-site-v3.json"));
    assert_eq!(site["version"], 3);
    assert_eq!(
        site["rules"],
        json!([{
            "domain": ["example.com", "foo.org"],
            "domain_suffix": ".example.com",
            "domain_regex": "^\\.]*?.example.net",
        }])
    );

    let ip = read_json(&dir.path().join("ads-ip-v3.json"));
    assert_eq!(ip["rules"], json!([{ "ip_cidr": "10.0.0.0/8" }]));

    let port = read_json(&dir.path().join("ads-port-v3.json"));
    assert_eq!(port["rules"], json!([{ "port": 443 }]));

    let process = read_json(&dir.path().join("ads-process-v3.json"));
    assert_eq!(process["rules"], json!([{ "process_name": "curl" }]));
}

#[test]
fn mixed_mode_writes_single_pair() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "ads.yaml", PROVIDER);

    let written = convert(&source, &config(true, 3)).unwrap();
    assert_eq!(
        written,
        vec![dir.path().join("ads-v3.json"), dir.path().join("ads-v3.srs")]
    );

    let mixed = read_json(&written[0]);
    let rules = mixed["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 4);
    assert_eq!(rules[0]["ip_cidr"], "10.0.0.0/8");
    assert_eq!(rules[0]["domain_suffix"], ".example.com");
    assert_eq!(rules[1], json!({ "port": 443 }));
    assert_eq!(rules[2], json!({ "source_ip_cidr": "192.168.1.0/24" }));
    assert_eq!(rules[3], json!({ "process_name": "curl" }));
}

#[test]
fn star_only_domain_yields_catch_all_site() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "star.list", "DOMAIN,*\n");

    let written = convert(&source, &config(false, 3)).unwrap();
    assert_eq!(
        written,
        vec![
            dir.path().join("star-site-v3.json"),
            dir.path().join("star-site-v3.srs"),
        ]
    );
    let site = read_json(&written[0]);
    assert_eq!(
        site,
        json!({
            "version": 3,
            "rules": [{}, { "domain_keyword": ".", "invert": true }],
        })
    );
}

#[test]
fn version_appears_in_names_and_header() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "lan.list", "IP-CIDR,10.0.0.0/8\n");

    let written = convert(&source, &config(false, 2)).unwrap();
    assert_eq!(
        written,
        vec![
            dir.path().join("lan-ip-v2.json"),
            dir.path().join("lan-ip-v2.srs"),
        ]
    );
    assert_eq!(read_json(&written[0])["version"], 2);

    let srs = fs::read(&written[1]).unwrap();
    assert_eq!(&srs[..4], b"SRS\x02");
    let mut body = Vec::new();
    ZlibDecoder::new(&srs[4..]).read_to_end(&mut body).unwrap();
    // one rule: default type, ip_cidr item, ip set format 1
    assert_eq!(&body[..4], &[1, 0, 6, 1]);
    assert_eq!(&body[body.len() - 2..], &[0xff, 0]);
}

#[test]
fn output_override_sets_stem() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "ads.list", "DST-PORT,53\n");
    let stem = dir.path().join("out");

    let cfg = ConvertConfig {
        output: Some(stem.to_str().unwrap().to_string()),
        ..config(false, 1)
    };
    let written = convert(&source, &cfg).unwrap();
    assert_eq!(written[0], dir.path().join("out-port-v1.json"));
}

#[test]
fn comment_only_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "empty.list", "# nothing here\n\n");

    let err = convert(&source, &config(false, 3)).unwrap_err();
    match err {
        ConvertError::EmptyResult { path } => assert!(path.ends_with("empty")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(file_names(&dir), vec!["empty.list"]);
}

#[test]
fn only_unsupported_rules_is_empty_result() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "geo.list", "GEOIP,CN\nOR,((DOMAIN,a.com))\n");

    assert!(matches!(
        convert(&source, &config(false, 3)),
        Err(ConvertError::EmptyResult { .. })
    ));
    assert_eq!(file_names(&dir), vec!["geo.list"]);
}

#[test]
fn zero_byte_source_is_empty_source() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "blank.yaml", "");

    assert!(matches!(
        convert(&source, &config(false, 3)),
        Err(ConvertError::EmptySource { .. })
    ));
}

#[test]
fn missing_source_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("absent.yaml");

    assert!(matches!(
        convert(source.to_str().unwrap(), &config(false, 3)),
        Err(ConvertError::SourceUnreadable { .. })
    ));
}

#[test]
fn invalid_cidr_leaves_no_srs() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "bad.list", "IP-CIDR,300.0.0.0/8\n");

    let err = convert(&source, &config(false, 3)).unwrap_err();
    assert!(matches!(err, ConvertError::Upgrade { .. }));
    assert!(dir.path().join("bad-ip-v3.json").exists());
    assert!(!dir.path().join("bad-ip-v3.srs").exists());
}

#[test]
fn unsupported_version_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "ads.list", "DOMAIN,example.com\n");

    assert!(matches!(
        convert(&source, &config(false, 4)),
        Err(ConvertError::Upgrade { .. })
    ));
    assert_eq!(file_names(&dir), vec!["ads.list"]);
}
