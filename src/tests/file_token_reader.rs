#[cfg(test)]
mod tests {
    use std::fs;
    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    use crate::error::TokenError;
    use crate::sources::{FileTokenReader, TokenReader};
    use crate::tests::common::write_temp_file;

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_exist_file");
        let reader = FileTokenReader::new(&path);

        let res = reader.read_token();
        match res {
            Err(TokenError::Open { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected open error, got {:?}", other),
        }
    }

    #[test]
    fn reads_token_from_file() {
        let (_dir, path) = write_temp_file("exist_file", "access_token=token");
        #[cfg(unix)]
        fs::set_permissions(&path, fs::Permissions::from_mode(0o666)).unwrap();

        let reader = FileTokenReader::new(&path);
        assert_eq!(reader.read_token().unwrap(), "token");
    }

    #[test]
    fn file_without_token_is_not_found() {
        let (_dir, path) = write_temp_file("token", "key1=value\nkey2=value2\n");
        let res = FileTokenReader::new(&path).read_token();
        assert!(matches!(res, Err(TokenError::TokenNotFound { .. })));
    }

    #[test]
    fn every_read_sees_current_file_content() {
        let (_dir, path) = write_temp_file("token", "access_token=first\n");
        let reader = FileTokenReader::new(&path);
        assert_eq!(reader.read_token().unwrap(), "first");
        assert_eq!(reader.read_token().unwrap(), "first");

        fs::write(&path, "expires_in=3600\naccess_token=second\n").unwrap();
        assert_eq!(reader.read_token().unwrap(), "second");

        fs::remove_file(&path).unwrap();
        assert!(matches!(reader.read_token(), Err(TokenError::Open { .. })));
    }

    #[test]
    fn custom_key_in_file() {
        let (_dir, path) = write_temp_file("token", "access_token=a\nrefresh_token=r\n");
        let reader = FileTokenReader::new(&path).with_key("refresh_token");
        assert_eq!(reader.key(), "refresh_token");
        assert_eq!(reader.read_token().unwrap(), "r");
    }

    #[test]
    fn directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // opening a directory succeeds on unix but reading it fails
        let res = FileTokenReader::new(dir.path()).read_token();
        assert!(matches!(res, Err(TokenError::Open { .. }) | Err(TokenError::Read(_))));
    }
}
