mod auth_flow_test;
mod content_test;
mod helpers;
