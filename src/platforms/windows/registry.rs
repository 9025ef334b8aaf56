use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS};
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE, REG_DWORD, REG_VALUE_TYPE, RegCloseKey,
    RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
};
use windows::core::{HSTRING, PCWSTR};

use crate::settings::{Access, SettingsError, SettingsKey, SettingsStore};

type Result<T = ()> = std::result::Result<T, SettingsError>;

/// Settings stored below `HKEY_LOCAL_MACHINE`
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: String,
}

impl RegistryStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for RegistryStore {
    type Key = RegistryKey;

    fn open(&self, access: Access) -> Result<RegistryKey> {
        let path = HSTRING::from(self.path.as_str());
        let sam = match access {
            Access::Read => KEY_READ,
            Access::Write => KEY_WRITE,
        };

        let mut hkey = HKEY::default();
        let status =
            unsafe { RegOpenKeyExW(HKEY_LOCAL_MACHINE, PCWSTR(path.as_ptr()), 0, sam, &mut hkey) };
        if status != ERROR_SUCCESS {
            return Err(SettingsError::Open {
                path: self.path.clone(),
                code: status.0,
            });
        }

        Ok(RegistryKey { hkey })
    }
}

/// An open registry key, closed on drop
#[derive(Debug)]
pub struct RegistryKey {
    hkey: HKEY,
}

impl SettingsKey for RegistryKey {
    fn get_dword(&self, name: &str) -> Result<Option<u32>> {
        let value_name = HSTRING::from(name);
        let mut kind = REG_VALUE_TYPE::default();
        let mut data = 0u32;
        let mut size = std::mem::size_of::<u32>() as u32;

        let status = unsafe {
            RegQueryValueExW(
                self.hkey,
                PCWSTR(value_name.as_ptr()),
                None,
                Some(&mut kind as *mut REG_VALUE_TYPE),
                Some(&mut data as *mut u32 as *mut u8),
                Some(&mut size as *mut u32),
            )
        };

        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(SettingsError::Read {
                name: name.to_string(),
                code: status.0,
            });
        }
        if kind != REG_DWORD {
            return Err(SettingsError::UnexpectedType(name.to_string()));
        }

        Ok(Some(data))
    }

    fn set_dword(&self, name: &str, value: u32) -> Result {
        let value_name = HSTRING::from(name);
        let data = value.to_le_bytes();

        let status = unsafe {
            RegSetValueExW(
                self.hkey,
                PCWSTR(value_name.as_ptr()),
                0,
                REG_DWORD,
                Some(&data),
            )
        };
        if status != ERROR_SUCCESS {
            return Err(SettingsError::Write {
                name: name.to_string(),
                code: status.0,
            });
        }

        Ok(())
    }
}

impl Drop for RegistryKey {
    fn drop(&mut self) {
        let _ = unsafe { RegCloseKey(self.hkey) };
    }
}
