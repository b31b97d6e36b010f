//! Sign-in errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("有効なメールアドレスを入力してください")]
    InvalidEmail,

    #[error("パスワードを入力してください")]
    MissingPassword,

    #[error("このメールアドレスのアカウントは存在しません")]
    UserNotFound,

    #[error("パスワードが正しくありません")]
    WrongPassword,

    #[error("{0} のアカウントは既に存在します")]
    EmailAlreadyInUse(String),
}
