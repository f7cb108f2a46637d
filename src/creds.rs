// Credential store: loads the GitHub username/password/token triple from
// an encrypted file pair, or prompts for it interactively and persists it
// for the next run. The payload file holds the AES-256-GCM ciphertext and
// the key file holds the key, both base64-encoded.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use anyhow::{anyhow, bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use dialoguer::{Input, Password};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fs;
use std::path::{Path, PathBuf};

const CREDS_FILE: &str = ".gitpick.creds";
const KEY_FILE: &str = ".gitpick.key";

const NONCE_LEN: usize = 12;

/// The credentials for one GitHub account. Loaded once at startup and
/// immutable for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Handle to the on-disk file pair. The default paths are fixed names in
/// the working directory; tests construct a store against a temp dir.
pub struct CredentialStore {
    creds_path: PathBuf,
    key_path: PathBuf,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::at_dir(Path::new("."))
    }

    pub fn at_dir(dir: &Path) -> Self {
        CredentialStore {
            creds_path: dir.join(CREDS_FILE),
            key_path: dir.join(KEY_FILE),
        }
    }

    /// Load credentials either from the file pair or from user input.
    ///
    /// Any failure reading the stored pair — missing file, bad base64,
    /// failed decryption, malformed plaintext — lands in the same bucket:
    /// prompt the user and save what they entered. Only the interactive
    /// prompt itself can make this return an error.
    pub fn load(&self) -> Result<Credentials> {
        match self.load_from_files() {
            Ok(creds) => {
                println!();
                println!("Credentials loaded");
                Ok(creds)
            }
            Err(_) => {
                println!();
                println!("Credentials file not detected");
                let creds = capture()?;
                self.save(&creds);
                Ok(creds)
            }
        }
    }

    fn load_from_files(&self) -> Result<Credentials> {
        let key_b64 = fs::read_to_string(&self.key_path)?;
        let payload_b64 = fs::read_to_string(&self.creds_path)?;

        let key = B64.decode(key_b64.trim())?;
        let blob = B64.decode(payload_b64.trim())?;

        let plaintext = decrypt(&key, &blob)?;
        let text = String::from_utf8(plaintext)?;

        // Stored as "username password token" with single-space separators.
        let fields: Vec<&str> = text.split(' ').collect();
        if fields.len() != 3 {
            bail!("Malformed credential payload");
        }

        Ok(Credentials {
            username: fields[0].to_string(),
            password: fields[1].to_string(),
            token: fields[2].to_string(),
        })
    }

    /// Encrypt and write the credentials under a freshly generated key.
    /// A save failure is printed and otherwise ignored; the process keeps
    /// the in-memory credentials for this run.
    pub fn save(&self, creds: &Credentials) {
        match self.try_save(creds) {
            Ok(()) => {
                println!();
                println!("Credentials saved");
            }
            Err(e) => println!("{}", e),
        }
    }

    fn try_save(&self, creds: &Credentials) -> Result<()> {
        let mut key = [0u8; 32];
        OsRng.fill_bytes(&mut key);

        let plaintext = format!("{} {} {}", creds.username, creds.password, creds.token);
        let blob = encrypt(&key, plaintext.as_bytes())?;

        fs::write(&self.creds_path, B64.encode(blob)).context("Failed to write credentials file")?;
        fs::write(&self.key_path, B64.encode(key)).context("Failed to write key file")?;
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt for the three fields: username echoed, password and token masked.
fn capture() -> Result<Credentials> {
    let username: String = Input::new()
        .with_prompt("Please enter your github username")
        .interact_text()?;
    let password: String = Password::new()
        .with_prompt(format!("Please enter password for user {}", username))
        .interact()?;
    let token: String = Password::new()
        .with_prompt(format!("Please enter token for user {}", username))
        .interact()?;

    Ok(Credentials {
        username,
        password,
        token,
    })
}

/// AES-256-GCM with a random nonce; the blob is nonce || ciphertext.
fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| anyhow!("Bad key length"))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| anyhow!("Encryption failed"))?;

    let mut blob = nonce_bytes.to_vec();
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

fn decrypt(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < NONCE_LEN {
        bail!("Credential payload too short");
    }
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| anyhow!("Bad key length"))?;
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| anyhow!("Decryption failed"))
}
