use ddgrs::search_url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let results = search_url("Best restaurants in San Francisco", 5).await?;

    println!("Search Results (URLs only):");
    for (i, url) in results.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }

    Ok(())
}
