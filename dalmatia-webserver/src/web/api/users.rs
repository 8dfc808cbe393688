use super::*;

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: &State<Connections>,
    jwt_state: &State<jwt::JwtState>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::RegisteredUser> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(db, new_user)?;
    let token = jwt_state.generate_token(user.id.as_str())?;
    Ok(Json(json::RegisteredUser {
        token,
        user: user.into(),
    }))
}

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: &State<Connections>,
    jwt_state: &State<jwt::JwtState>,
    login: JsonResult<json::Credentials>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = flows::login(db, from_json::credentials(&login)).map_err(|err| {
        debug!("Login of '{}' failed: {}", login.username, err);
        err
    })?;
    let token = jwt_state.generate_token(user.id.as_str())?;
    Ok(Json(json::JwtToken { token }))
}
