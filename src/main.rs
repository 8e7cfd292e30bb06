use books_api::{config::Config, router::Router, store::dynamo::DynamoBookStore};
use lambda_http::{Error, Request, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let client = config.dynamodb_client().await;
    let router = Router::new(DynamoBookStore::new(client, &config));
    tracing::info!(table = %config.table_name, "books api ready");

    let router = &router;
    run(service_fn(move |event: Request| async move {
        Ok::<_, Error>(router.handle(event).await)
    }))
    .await
}
