pub mod support;

mod api_flow;
