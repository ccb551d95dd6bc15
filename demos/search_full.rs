use ddgrs::{ DuckDuckGoClient, SearchClient };
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let query = args
        .iter()
        .filter(|arg| *arg != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let query = if query.is_empty() { "come se fosse antani".to_string() } else { query };

    let client = DuckDuckGoClient::builder().timeout(10).build()?;
    let results = client.search_limited(&query, 5).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Full Search Results:");
    for (i, result) in results.iter().enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   URL: {}", result.formatted_url);
        println!("   Snippet: {}", result.snippet);
        if !result.icon.src.is_empty() {
            println!("   Icon: {} ({}x{})", result.icon.src, result.icon.width, result.icon.height);
        }
        println!();
    }

    Ok(())
}
