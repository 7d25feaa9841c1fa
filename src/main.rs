fn main() {
    #[cfg(feature = "csr")]
    overclockart_web::start();
}
