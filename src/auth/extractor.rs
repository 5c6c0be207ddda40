//! Actix-web extractor for bearer-token authentication.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::CurrentUser;

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Extractor that resolves the calling user from a bearer token.
///
/// The token's subject is looked up in the users table on every request,
/// so role changes and deletions take effect immediately.
pub struct AuthUser {
    pub user: CurrentUser,
}

impl AuthUser {
    /// Reject non-admin callers with 403.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.user.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Not authorized".to_string()))
        }
    }
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<DbPool>>().cloned();
        let config = req.app_data::<web::Data<Config>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let (pool, config) = match (pool, config) {
                (Some(pool), Some(config)) => (pool, config),
                _ => {
                    return Err(AppError::Database(
                        "Internal configuration error".to_string(),
                    ))
                }
            };

            let token = token.ok_or_else(|| {
                AppError::Unauthorized("Could not validate credentials".to_string())
            })?;

            let claims = crate::auth::verify_token(&token, &config.jwt_secret)?;

            let user = pool
                .find_user_by_username(&claims.sub)
                .await?
                .ok_or_else(|| {
                    AppError::Unauthorized("Could not validate credentials".to_string())
                })?;

            Ok(AuthUser { user: user.into() })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_missing_and_malformed_headers() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }
}
