// src/services/auth.rs

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{common::error::AppError, models::auth::Claims};

#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
}

impl AuthService {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    /// Valida assinatura (HS256), expiração e papel de administrador.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens do provedor trazem `aud`, que não usamos
        validation.validate_aud = false;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        if !token_data.claims.is_admin() {
            tracing::warn!(sub = %token_data.claims.sub, role = %token_data.claims.role, "Acesso negado: papel sem permissão");
            return Err(AppError::Forbidden);
        }
        Ok(token_data.claims)
    }

    /// Emite um token de serviço (scripts internos e testes).
    pub fn issue_token(&self, sub: &str, role: &str, ttl: chrono::Duration) -> Result<String, AppError> {
        let claims = Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            email: None,
            exp: (Utc::now() + ttl).timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| AppError::InternalServerError(e.into()))
    }
}
