use std::{env, time::Duration};

use freessl::{api::VerifyMethod, Config, CreateOptions, FreeSsl};
use tokio::{fs, time::sleep};

const CERTS_DIR: &str = "./freessl-certs";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let domain = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: issue <domain>"))?;

    let config = Config {
        organization_name: env::var("FREESSL_ORGANIZATION").unwrap_or_default(),
        email_address: env::var("FREESSL_EMAIL").unwrap_or_default(),
        ..Config::new(env::var("FREESSL_ACCESS_KEY")?, env::var("FREESSL_USER_NAME")?)
    };

    let freessl = FreeSsl::new(config);

    log::info!("applying for a certificate for {domain}");
    let created = freessl
        .create_certificate(
            &domain,
            CreateOptions {
                verify_method: VerifyMethod::Dns,
                ..Default::default()
            },
        )
        .await?;

    fs::create_dir_all(CERTS_DIR).await?;

    let key_path = format!("{CERTS_DIR}/{domain}.key");
    log::info!("persisting private key to {key_path}");
    fs::write(&key_path, created.private_key()).await?;

    let id = created.response().msg["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("no certificate id in {:?}", created.response()))?
        .to_owned();

    let auth_info = freessl.get_certificate_auth_info(&id).await?;
    log::info!("add this DNS record, then press enter: {:#}", auth_info.msg);

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    for attempt in 1..=10 {
        log::info!("asking for domain validation (attempt {attempt})");

        match freessl.verify_domain(&id).await {
            Ok(res) if res.is_success() => break,
            Ok(res) => log::warn!("not validated yet: {}", res.error),
            Err(err) => log::warn!("validation failed: {err}"),
        }

        sleep(Duration::from_secs(15)).await;
    }

    let download = freessl.download_certificate(&id).await?;
    let cert_path = format!("{CERTS_DIR}/{domain}.pem");

    log::info!("persisting certificate to {cert_path}");
    fs::write(&cert_path, download.msg.certificate()).await?;

    if let Ok(days) = download.msg.valid_days_left() {
        log::info!("certificate valid for {days} more days");
    }

    Ok(())
}
