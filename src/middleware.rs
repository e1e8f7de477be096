use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{
        header::{self, HeaderMap, HeaderValue},
        Method,
    },
    middleware::Next,
    Error, HttpResponse,
};

/// Permissive CORS handling
///
/// `OPTIONS` requests on any path are answered here with `OK`, echoing the
/// requested headers and method back as the allowed ones. Every response,
/// preflight or not, gets `Access-Control-Allow-Origin: *`.
pub async fn cors(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let mut res = if req.method() == Method::OPTIONS {
        tracing::debug!("CORS preflight for {}", req.path());
        let response = preflight_response(req.headers());
        req.into_response(response)
    } else {
        let http_req = req.request().clone();
        match next.call(req).await {
            Ok(res) => res.map_into_boxed_body(),
            // Render inner errors here so they still get the origin header
            Err(err) => ServiceResponse::from_err(err, http_req),
        }
    };

    res.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    Ok(res)
}

fn preflight_response(headers: &HeaderMap) -> HttpResponse {
    let mut response = HttpResponse::Ok();

    if let Some(requested) = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        response.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()));
    }
    if let Some(requested) = headers.get(header::ACCESS_CONTROL_REQUEST_METHOD) {
        response.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, requested.clone()));
    }

    response.body("OK")
}
