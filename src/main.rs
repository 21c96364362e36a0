#[actix_web::main]
async fn main() -> std::io::Result<()> {
    reglement_server::run().await
}
