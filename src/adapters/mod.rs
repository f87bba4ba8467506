pub mod bento;
pub mod http;
pub mod woocommerce;
