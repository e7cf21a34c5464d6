use postview::config::Config;
use postview::core::path::config_file;
use postview::core::PostviewResult;

pub fn get_url() -> PostviewResult<()> {
    let config = Config::load()?;
    println!("{}", config.posts_url);
    Ok(())
}

pub fn set_url(url: String) -> PostviewResult<()> {
    let mut config = Config::load()?;
    config.set_posts_url(&url)?;
    config.save()?;

    println!("✓ Posts URL set to: {}", config.posts_url);
    Ok(())
}

pub fn set_timeout(secs: u64) -> PostviewResult<()> {
    let mut config = Config::load()?;
    config.set_request_timeout_secs(secs)?;
    config.save()?;

    println!("✓ Request timeout set to: {}s", config.request_timeout_secs);
    Ok(())
}

pub fn show() -> PostviewResult<()> {
    let config = Config::load()?;
    println!("Config file: {}", config_file()?.display());
    println!("  posts_url: {}", config.posts_url);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    Ok(())
}
