/// Edge length of an avatar image. `Original` asks for the uploaded size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    #[default]
    Original,
    Small,
    Medium,
    Large,
}

impl AvatarSize {
    pub fn pixels(self) -> u32 {
        match self {
            Self::Original => 0,
            Self::Small => 40,
            Self::Medium => 100,
            Self::Large => 640,
        }
    }
}

pub fn user_avatar_url(user_id: i64, size: AvatarSize) -> String {
    format!(
        "https://q2.qlogo.cn/headimg_dl?dst_uin={user_id}&spec={}",
        size.pixels()
    )
}

pub fn group_avatar_url(group_id: i64, size: AvatarSize) -> String {
    format!(
        "https://p.qlogo.cn/gh/{group_id}/{group_id}/{}",
        size.pixels()
    )
}
