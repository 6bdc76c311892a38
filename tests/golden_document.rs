use std::fs;
use std::path::PathBuf;

use markupkit::{Document, MarkupBuilder, StaticProbe};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_report_matches_fixture() {
    let doc = Document::from_json_file("tests/goldens/pages/report.json").expect("load fixture");
    let mut builder = MarkupBuilder::new().with_probe(StaticProbe::new());
    let html = doc.render(&mut builder).expect("render");

    let expected_path = golden_path("report.html");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &html).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(html, exp);
}
