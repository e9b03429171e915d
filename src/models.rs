use nix::unistd::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub uid: u32,
    pub gid: u32
}

impl From<User> for UserIdentity {

    fn from(user: User) -> Self {

        UserIdentity {
            name: user.name,
            uid: user.uid.as_raw(),
            gid: user.gid.as_raw()
        }

    }

}
