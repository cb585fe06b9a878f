//! Sprite loading
//!
//! The game loop must not start until every sprite has decoded. Each image
//! exposes a decode() promise; awaiting all four is the loading gate.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// The four sprites the renderer draws
pub struct Sprites {
    pub player: HtmlImageElement,
    pub flower: HtmlImageElement,
    pub cloud: HtmlImageElement,
    pub background: HtmlImageElement,
}

/// Start one image fetch
fn fetch(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

/// Wait for an image to be fetched and fully decoded
async fn ready(img: &HtmlImageElement) -> Result<(), JsValue> {
    JsFuture::from(img.decode()).await?;
    Ok(())
}

/// Load all sprites, resolving only when every one has decoded. A missing
/// asset rejects the future and the loop never starts.
pub async fn load_sprites() -> Result<Sprites, JsValue> {
    // Kick off all four fetches before awaiting any of them
    let player = fetch("assets/player.png")?;
    let flower = fetch("assets/flower.png")?;
    let cloud = fetch("assets/cloud.png")?;
    let background = fetch("assets/background.png")?;

    ready(&player).await?;
    ready(&flower).await?;
    ready(&cloud).await?;
    ready(&background).await?;

    log::info!("All sprites decoded");
    Ok(Sprites {
        player,
        flower,
        cloud,
        background,
    })
}
