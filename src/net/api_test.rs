use super::*;

// =============================================================
// ApiError normalization
// =============================================================

#[test]
fn rejected_carries_the_server_detail() {
    let err = ApiError::Rejected("bad credentials".to_owned());
    assert_eq!(err.detail(), Some("bad credentials"));
    assert_eq!(err.to_string(), "bad credentials");
}

#[test]
fn transport_has_no_detail() {
    assert_eq!(ApiError::Transport.detail(), None);
    assert_eq!(ApiError::Transport.to_string(), "request failed");
}

// =============================================================
// Native stubs
// =============================================================

#[test]
#[cfg(not(feature = "csr"))]
fn native_stubs_fail_as_transport() {
    let payload = LoginPayload {
        email: "u@test".to_owned(),
        password: "pw".to_owned(),
    };
    let outcome = futures::executor::block_on(HttpApi.login(&payload));
    assert_eq!(outcome, Err(ApiError::Transport));

    let outcome = futures::executor::block_on(HttpApi.me());
    assert_eq!(outcome, Err(ApiError::Transport));
}
