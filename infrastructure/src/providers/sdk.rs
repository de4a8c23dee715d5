//! Shared AWS SDK configuration

use crate::config::FileAwsConfig;
use tracing::debug;

/// Resolve credentials and region once for every AWS client.
///
/// An unset region or profile falls back to the SDK's default provider chain.
pub async fn load_sdk_config(config: &FileAwsConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;
    debug!(
        region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
        "AWS SDK configuration loaded"
    );
    sdk_config
}
