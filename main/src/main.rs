use doc_parser::json;
use doc_parser::json::{DecodeErr, FromJson, Value};
use doc_parser::yaml;
use doc_parser_macros::FromJson;

#[derive(FromJson, Debug)]
struct ServerConfig {
    host: String,
    port: i32,
    tls: bool,
    upstreams: Vec<String>,
    limits: Option<Limits>,
}

#[derive(FromJson, Debug)]
struct Limits {
    connections: i32,
    requests: i32,
}

fn main() {
    let config = json::parse(include_str!("config.json")).expect("config.json should parse");
    println!("{config:#?}");

    let server = ServerConfig::from_json(&config);
    println!("{server:#?}");

    let manifest = yaml::parse(include_str!("deployment.yaml"));
    println!("{manifest:#?}");

    // A broken document comes back with a positioned diagnostic.
    if let Err(err) = json::parse(r#"{"host" "localhost"}"#) {
        println!("{err}");
    }
}
