// src/models/auth.rs

use serde::{Deserialize, Serialize};

pub const ADMIN_ROLES: [&str; 2] = ["admin", "service_role"];

/// Claims do token emitido pelo serviço de autenticação hospedado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (ID do usuário)
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize, // Expiration time
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        ADMIN_ROLES.contains(&self.role.as_str())
    }
}
