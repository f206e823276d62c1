use std::env;

use freessl::{api::ListOptions, Config, FreeSsl};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::new(env::var("FREESSL_ACCESS_KEY")?, env::var("FREESSL_USER_NAME")?);
    let freessl = FreeSsl::new(config);

    let options = ListOptions {
        status: env::args().nth(1).unwrap_or_else(|| "issued".to_owned()),
        ..Default::default()
    };

    log::info!("listing {} certificates", options.status);

    match freessl.get_certificate_list(&options).await {
        Ok(res) => println!("{:#}", res.msg),
        Err(err) => {
            log::error!("listing failed with {:?}", err.status_code());
            return Err(err.into());
        }
    }

    Ok(())
}
