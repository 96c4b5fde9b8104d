//! OpenAPI description of the relay endpoint.

use serde_json::{json, Value};

/// Build the OpenAPI 3.0 document for `/api/fetch`, declaring `server_url` as its base.
pub fn api_description(title: &str, server_url: &str) -> Value {
    let error_body = json!({
        "application/json": {
            "schema": {
                "type": "object",
                "properties": {
                    "error": { "type": "string" }
                }
            }
        }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": title,
            "description": "Fetches a URL server-side and relays the response",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "servers": [
            { "url": server_url, "description": "Relay server" }
        ],
        "paths": {
            "/api/fetch": {
                "get": {
                    "summary": "Fetch URL content",
                    "description": "Fetches content from the specified URL and returns it with X-Fetched-From and X-Fetch-Timestamp headers",
                    "parameters": [
                        {
                            "name": "url",
                            "in": "query",
                            "required": true,
                            "description": "URL to fetch",
                            "schema": { "type": "string", "format": "uri" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "headers": {
                                "X-Fetched-From": {
                                    "description": "The requested URL",
                                    "schema": { "type": "string" }
                                },
                                "X-Fetch-Timestamp": {
                                    "description": "Fetch time (ISO-8601)",
                                    "schema": { "type": "string", "format": "date-time" }
                                }
                            },
                            "content": {
                                "*/*": {
                                    "schema": { "type": "string", "description": "The fetched content" }
                                }
                            }
                        },
                        "400": { "description": "Bad Request - Invalid URL", "content": error_body.clone() },
                        "404": { "description": "Not Found - host not found or upstream 404", "content": error_body.clone() },
                        "408": { "description": "Request Timeout", "content": error_body.clone() },
                        "500": { "description": "Internal Server Error", "content": error_body.clone() },
                        "502": { "description": "Bad Gateway - connection refused", "content": error_body.clone() },
                        "default": { "description": "Upstream non-2xx status passed through", "content": error_body }
                    }
                }
            }
        }
    })
}
