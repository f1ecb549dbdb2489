//! ベストタイムの保存/読み込み。
//!
//! 永続化するのは勝利ラウンドの最短秒数ひとつだけ。localStorage の
//! 固定キーに 10進整数の文字列（例: `"25"`）で書く。パースできない
//! 値は「記録なし」として扱い、壊れたエントリはその場で削除する。
//!
//! 読み込みは起動時に一度、書き込みは新記録が出たときだけ。失敗は
//! コンソール警告にとどめ、ゲームには伝播させない。

/// localStorage のキー。
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "tenzies_best_time";

/// 保存された文字列からベストタイム（秒）を復元する。
/// 整数として読めない値はすべて None。
#[cfg(any(target_arch = "wasm32", test))]
fn decode_best(raw: &str) -> Option<u32> {
    serde_json::from_str(raw).ok()
}

/// ベストタイム（秒）を保存用の文字列にする。
#[cfg(any(target_arch = "wasm32", test))]
fn encode_best(secs: u32) -> String {
    // u32 のシリアライズは失敗しない
    serde_json::to_string(&secs).unwrap_or_default()
}

/// localStorage にアクセスする。WASM 環境でのみ動作。
#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// 起動時に一度だけ呼ぶ。エントリが無い・読めない場合は None。
#[cfg(target_arch = "wasm32")]
pub fn load_best() -> Option<u32> {
    let storage = get_storage()?;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    match decode_best(&raw) {
        Some(secs) => Some(secs),
        None => {
            web_sys::console::warn_1(
                &format!("テンジーズ: ベストタイムの値が壊れています（破棄します）: {raw:?}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            None
        }
    }
}

/// 新記録が出るたびに呼ぶ。
#[cfg(target_arch = "wasm32")]
pub fn store_best(secs: u32) {
    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &encode_best(secs)) {
            web_sys::console::warn_1(
                &format!("テンジーズ: ベストタイムの保存に失敗: {e:?}").into(),
            );
        }
    }
}

/// ネイティブビルド（テスト実行）では永続化しない。
#[cfg(not(target_arch = "wasm32"))]
pub fn load_best() -> Option<u32> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_best(_secs: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_plain_integers() {
        assert_eq!(decode_best("25"), Some(25));
        assert_eq!(decode_best("0"), Some(0));
        assert_eq!(decode_best(" 7 "), Some(7));
    }

    #[test]
    fn decode_rejects_junk() {
        assert_eq!(decode_best(""), None);
        assert_eq!(decode_best("abc"), None);
        assert_eq!(decode_best("{\"best\":25}"), None);
        assert_eq!(decode_best("12.5"), None);
        assert_eq!(decode_best("-5"), None);
    }

    #[test]
    fn decode_rejects_overflow() {
        assert_eq!(decode_best("99999999999999999999"), None);
    }

    #[test]
    fn encode_is_a_decimal_integer() {
        assert_eq!(encode_best(25), "25");
        assert_eq!(encode_best(0), "0");
    }

    #[test]
    fn roundtrip() {
        for secs in [0u32, 1, 59, 60, 3600, u32::MAX] {
            assert_eq!(decode_best(&encode_best(secs)), Some(secs));
        }
    }
}
