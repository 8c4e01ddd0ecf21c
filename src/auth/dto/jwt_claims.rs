use serde::Deserialize;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(default)]
    pub realm_access: JwtClaimsRealmAccess,
}

#[derive(Default, Deserialize)]
pub struct JwtClaimsRealmAccess {
    pub roles: Vec<String>,
}
