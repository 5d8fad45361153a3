pub mod dns_request;
