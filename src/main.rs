use certification::handlers::handle_request;
use certification::{CertificateResolver, Config, JsonRpcLedger};
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use log::{error, info};
use std::convert::Infallible;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    info!(
        "Reading certifications from contract {} via {}",
        config.contract_address, config.rpc_url
    );

    let ledger = JsonRpcLedger::new(&config.rpc_url, &config.contract_address);
    let resolver = Arc::new(CertificateResolver::new(Box::new(ledger)));

    let make_svc = make_service_fn(move |_conn| {
        let resolver = resolver.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |req| handle_request(resolver.clone(), req)))
        }
    });

    let server = Server::try_bind(&config.listen_addr)?.serve(make_svc);
    info!("Listening on http://{}", server.local_addr());

    if let Err(e) = server.await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
