/// Upload page served at `/`.
pub const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Apparel Caption Studio</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
            background: #f8f6f3;
            min-height: 100vh;
            padding: 60px 20px;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
        }

        h1 {
            font-size: 36px;
            font-weight: 600;
            margin-bottom: 10px;
        }

        .subtitle {
            color: #666;
            margin-bottom: 40px;
        }

        .card {
            background: white;
            padding: 30px;
            border-radius: 20px;
            box-shadow: 0 8px 30px rgba(0,0,0,0.05);
        }

        .upload-button {
            background: #111;
            color: white;
            padding: 12px 24px;
            border-radius: 12px;
            cursor: pointer;
            display: inline-block;
            margin-bottom: 20px;
        }

        input[type="file"] {
            display: none;
        }

        .options {
            margin-bottom: 20px;
        }

        .options label {
            margin-right: 20px;
        }

        .options select {
            margin-left: 10px;
            padding: 6px;
        }

        .preview-container {
            display: none;
        }

        .preview-image {
            width: 300px;
            border-radius: 16px;
            margin-bottom: 20px;
        }

        button {
            padding: 10px 18px;
            margin-right: 10px;
            border-radius: 10px;
            cursor: pointer;
        }

        button.primary {
            border: none;
            background: #000;
            color: white;
        }

        button.secondary {
            border: 1px solid #ddd;
            background: white;
        }

        button:disabled {
            opacity: 0.5;
            cursor: wait;
        }

        .loading {
            margin-top: 30px;
            color: #555;
            display: none;
        }

        .results {
            margin-top: 40px;
            display: none;
        }

        .results ul {
            margin-top: 10px;
            padding-left: 20px;
            line-height: 1.6;
        }

        .empty {
            color: #999;
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Apparel Caption Studio ✨</h1>
        <p class="subtitle">Generate high-converting fashion captions &amp; descriptions using AI.</p>

        <div class="card">
            <label class="upload-button">
                Upload Image
                <input type="file" id="fileInput" accept="image/*">
            </label>

            <div class="options">
                <label>Tone:
                    <select id="tone">
                        <option>Playful</option>
                        <option>Luxury</option>
                        <option>Premium</option>
                        <option>Minimal</option>
                        <option>Emotional</option>
                        <option>High-Converting Sales</option>
                        <option>Trendy Gen-Z</option>
                        <option>Festive</option>
                        <option>Corporate Professional</option>
                    </select>
                </label>

                <label>Platform:
                    <select id="platform">
                        <option>Instagram</option>
                        <option>Facebook</option>
                        <option>Amazon</option>
                        <option>Flipkart</option>
                        <option>Myntra</option>
                        <option>Shopify</option>
                        <option>Website SEO</option>
                        <option>WhatsApp Catalog</option>
                    </select>
                </label>

                <label>
                    <input type="checkbox" id="emojis" checked> Include Emojis
                </label>
            </div>

            <div class="preview-container" id="previewContainer">
                <img id="previewImage" class="preview-image" alt="Preview">
                <div>
                    <button class="primary" id="captionButton">Generate Captions</button>
                    <button class="secondary" id="descriptionButton">Generate Descriptions</button>
                </div>
            </div>
        </div>

        <p class="loading" id="loading">Generating...</p>
        <div class="error" id="error"></div>

        <div class="results" id="captionResults">
            <h2>Captions</h2>
            <ul id="captionList"></ul>
        </div>

        <div class="results" id="descriptionResults">
            <h2>Descriptions</h2>
            <ul id="descriptionList"></ul>
        </div>
    </div>

    <script>
        const fileInput = document.getElementById('fileInput');
        const previewContainer = document.getElementById('previewContainer');
        const previewImage = document.getElementById('previewImage');
        const loading = document.getElementById('loading');
        const errorDiv = document.getElementById('error');
        const buttons = [
            document.getElementById('captionButton'),
            document.getElementById('descriptionButton'),
        ];

        const outputs = {
            caption: {
                endpoint: '/generate-caption',
                field: 'captions',
                section: document.getElementById('captionResults'),
                list: document.getElementById('captionList'),
            },
            description: {
                endpoint: '/generate-description',
                field: 'descriptions',
                section: document.getElementById('descriptionResults'),
                list: document.getElementById('descriptionList'),
            },
        };

        let image = null;
        let previewUrl = null;

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (!file) return;

            image = file;
            if (previewUrl) URL.revokeObjectURL(previewUrl);
            previewUrl = URL.createObjectURL(file);
            previewImage.src = previewUrl;
            previewContainer.style.display = 'block';
            errorDiv.style.display = 'none';
            Object.values(outputs).forEach((o) => {
                o.list.innerHTML = '';
                o.section.style.display = 'none';
            });
        });

        buttons[0].addEventListener('click', () => generate('caption'));
        buttons[1].addEventListener('click', () => generate('description'));

        function render(output, lines) {
            output.list.innerHTML = '';
            if (lines.length === 0) {
                const li = document.createElement('li');
                li.className = 'empty';
                li.textContent = 'No results.';
                output.list.appendChild(li);
            }
            lines.forEach((line) => {
                const li = document.createElement('li');
                li.textContent = line;
                output.list.appendChild(li);
            });
            output.section.style.display = 'block';
        }

        async function generate(kind) {
            if (!image) return;
            const output = outputs[kind];

            const formData = new FormData();
            formData.append('image', image);
            formData.append('emojis', String(document.getElementById('emojis').checked));
            formData.append('tone', document.getElementById('tone').value);
            formData.append('platform', document.getElementById('platform').value);

            buttons.forEach((b) => (b.disabled = true));
            loading.style.display = 'block';
            errorDiv.style.display = 'none';

            try {
                const response = await fetch(output.endpoint, {
                    method: 'POST',
                    body: formData,
                });
                const data = await response.json();

                if (!response.ok) {
                    throw new Error(data.error || 'Generation failed');
                }

                render(output, data[output.field] || []);
            } catch (error) {
                errorDiv.textContent = 'Error: ' + error.message;
                errorDiv.style.display = 'block';
            } finally {
                loading.style.display = 'none';
                buttons.forEach((b) => (b.disabled = false));
            }
        }
    </script>
</body>
</html>
"#;
