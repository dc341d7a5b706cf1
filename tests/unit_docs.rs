use registrar::docs::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_shared_handlers_document_their_alias_mounts() {
    // Several handlers are mounted under more than one route-group prefix;
    // the OpenAPI document must mention every mount, either as a documented
    // path or in the operation description.
    let doc = serde_json::to_string(&ApiDoc::openapi()).unwrap();

    for mount in [
        "/api/admin/faculty/{id}",
        "/api/admin/student/{id}",
        "/api/faculty/student/{id}",
        "/api/faculty/student",
    ] {
        assert!(doc.contains(mount), "OpenAPI document omits mount {mount}");
    }
}

#[test]
fn test_bearer_scheme_is_registered() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.expect("components");

    assert!(components.security_schemes.contains_key("bearer_auth"));
}
