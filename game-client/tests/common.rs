use serde_json::json;
use std::net::SocketAddr;
use warp::Filter;
use warp::http::StatusCode;

/// Local stand-in for the word-list and dictionary APIs
pub async fn spawn_stub_api() -> SocketAddr {
    let all =
        warp::path!("all").map(|| warp::reply::json(&vec!["apple", "banana", "cherry", "x1y"]));
    let empty = warp::path!("empty").map(|| warp::reply::json(&Vec::<String>::new()));
    let broken = warp::path!("broken").map(|| warp::reply::json(&json!({ "words": "apple" })));

    let entries = warp::path!("entries" / "en" / String).map(|word: String| {
        let (body, status) = match word.as_str() {
            "apple" => (
                json!([{
                    "word": "apple",
                    "meanings": [{
                        "partOfSpeech": "noun",
                        "definitions": [
                            { "definition": "A common, round fruit." },
                            { "definition": "A second sense." }
                        ]
                    }]
                }]),
                StatusCode::OK,
            ),
            "shapeless" => (json!([{ "word": "shapeless", "meanings": [] }]), StatusCode::OK),
            _ => (
                json!({ "title": "No Definitions Found" }),
                StatusCode::NOT_FOUND,
            ),
        };
        warp::reply::with_status(warp::reply::json(&body), status)
    });

    let routes = all.or(empty).or(broken).or(entries);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
