/// Backend base URL, substituted at build time like the deployment's
/// public environment variables.
pub fn api_base_url() -> &'static str {
    option_env!("VERDICTS_API_URL").unwrap_or("http://localhost:4000")
}
